use rstest::rstest;

use nuget_frameworks::framework::constants::{identifiers, profiles};
use nuget_frameworks::framework::providers::default_name_provider;
use nuget_frameworks::framework::{
    FrameworkComparer, FrameworkNameProvider, NuGetFramework, Version4,
};

#[rstest]
#[case("net45", identifiers::NET, Version4::new(4, 5, 0, 0), "")]
#[case("net", identifiers::NET, Version4::ZERO, "")]
#[case("NET451", identifiers::NET, Version4::new(4, 5, 1, 0), "")]
#[case("net4.5.1", identifiers::NET, Version4::new(4, 5, 1, 0), "")]
#[case("net40-client", identifiers::NET, Version4::new(4, 0, 0, 0), profiles::CLIENT)]
#[case("net40-Client", identifiers::NET, Version4::new(4, 0, 0, 0), profiles::CLIENT)]
#[case("net35-custom", identifiers::NET, Version4::new(3, 5, 0, 0), "custom")]
#[case("sl4-wp71", identifiers::SILVERLIGHT, Version4::new(4, 0, 0, 0), profiles::WINDOWS_PHONE_71)]
#[case("win8", identifiers::WINDOWS, Version4::new(8, 0, 0, 0), "")]
#[case("wp71", identifiers::WINDOWS_PHONE, Version4::new(7, 1, 0, 0), "")]
#[case("netcore45", identifiers::NET_CORE, Version4::new(4, 5, 0, 0), "")]
#[case("winrt45", identifiers::NET_CORE, Version4::new(4, 5, 0, 0), "")]
#[case("NETFramework4.5", identifiers::NET, Version4::new(4, 5, 0, 0), "")]
#[case(".NETFramework45", identifiers::NET, Version4::new(4, 5, 0, 0), "")]
#[case("monoandroid10", identifiers::MONO_ANDROID, Version4::new(1, 0, 0, 0), "")]
#[case("xamarinios", identifiers::XAMARIN_IOS, Version4::ZERO, "")]
fn parse_returns_expected(
    #[case] folder_name: &str,
    #[case] framework: &str,
    #[case] version: Version4,
    #[case] profile: &str,
) {
    let parsed = NuGetFramework::parse(folder_name);

    assert_eq!(parsed.framework(), framework);
    assert_eq!(*parsed.version(), version);
    assert_eq!(parsed.profile(), profile);
    assert!(parsed.is_specific_framework());
}

#[rstest]
#[case("")]
#[case("randomfolder")]
#[case("lib")]
#[case("content")]
#[case("net45123")] // too many compact version digits
#[case("net4.5.1.2.3")] // too many version components
#[case("portable4a")]
#[case("45")]
fn parse_unrecognized_is_unsupported(#[case] folder_name: &str) {
    let parsed = NuGetFramework::parse(folder_name);

    assert!(parsed.is_unsupported());
    assert!(!parsed.is_specific_framework());
    assert_eq!(&parsed, NuGetFramework::unsupported());
}

#[test]
fn parse_portable_profile() {
    let parsed = NuGetFramework::parse("portable-net45+win8");

    assert_eq!(parsed.framework(), identifiers::PORTABLE);
    assert_eq!(*parsed.version(), Version4::ZERO);
    assert_eq!(parsed.profile(), "Profile7");
    assert!(parsed.is_pcl());
    assert_eq!(
        parsed.full_framework_name(),
        "Portable, Version=v0.0, Profile=Profile7"
    );
}

#[rstest]
#[case("portable-net45+win8")]
#[case("portable-win8+net45")]
#[case("portable-net4.5+windows8")]
#[case("portable-win8+net45+win8")]
#[case("portable-net45+netcore45")] // netcore45 is equivalent to win8
#[case("portable-Profile7")]
#[case("PORTABLE-profile7")]
fn portable_profile_is_independent_of_spelling_and_order(#[case] folder_name: &str) {
    assert_eq!(NuGetFramework::parse(folder_name).profile(), "Profile7");
}

#[rstest]
#[case("portable-win8+netcore45+net45")]
#[case("portable-net45+win+win8")]
fn portable_profile_collapses_equivalent_constituents(#[case] folder_name: &str) {
    assert_eq!(NuGetFramework::parse(folder_name).profile(), "Profile7");
}

#[rstest]
#[case("portable-net45", Version4::ZERO, "net45")] // no profile for a single framework
#[case("portable-net45+wp7", Version4::ZERO, "net45+wp7")]
#[case("portable-net45+randomfolder", Version4::ZERO, "net45+randomfolder")]
#[case("portable40-Profile9999", Version4::new(4, 0, 0, 0), "Profile9999")]
#[case("portable", Version4::ZERO, "")]
fn portable_unknown_profile_keeps_raw_token(
    #[case] folder_name: &str,
    #[case] version: Version4,
    #[case] profile: &str,
) {
    let provider = default_name_provider();
    let parsed = NuGetFramework::parse_with(folder_name, provider);

    assert!(!parsed.is_unsupported());
    assert_eq!(parsed.framework(), identifiers::PORTABLE);
    assert_eq!(*parsed.version(), version);
    assert_eq!(parsed.profile(), profile);
    assert_eq!(
        NuGetFramework::parse_with(&parsed.short_folder_name(provider), provider),
        parsed
    );
}

#[rstest]
#[case("portable-net45+sl5+win8+wp8", "Profile158")]
#[case("portable-net45+win8+wp8+wpa81", "Profile259")]
#[case("portable-win81+wpa81", "Profile32")]
#[case("portable-net4+sl4", "Profile3")]
fn portable_profile_numbers(#[case] folder_name: &str, #[case] profile: &str) {
    assert_eq!(NuGetFramework::parse(folder_name).profile(), profile);
}

#[test]
fn portable_with_version_is_not_pcl() {
    let parsed = NuGetFramework::parse("portable40-net45+win8");

    assert_eq!(*parsed.version(), Version4::new(4, 0, 0, 0));
    assert_eq!(parsed.profile(), "Profile7");
    assert!(!parsed.is_pcl());
}

#[test]
fn constructed_version_is_normalized() {
    let framework = NuGetFramework::with_version("net", (4, 5, -1, -1));
    assert_eq!(*framework.version(), Version4::new(4, 5, 0, 0));
}

#[test]
fn full_comparer_scenario() {
    let net45 = NuGetFramework::with_version("net", (4, 5, 0, 0));
    let upper = NuGetFramework::with_version("NET", (4, 5, 0, 0));
    let net40 = NuGetFramework::with_version("net", (4, 0, 0, 0));

    assert!(NuGetFramework::comparer().equals(&net45, &upper));
    assert!(!NuGetFramework::comparer().equals(&net45, &net40));
}

#[test]
fn full_framework_name_scenario() {
    let framework = NuGetFramework::new("net", (4, 5, 1, 0), "Client");
    assert_eq!(
        framework.full_framework_name(),
        "net, Version=v4.5.1, Profile=Client"
    );
}

#[test]
fn parsed_frameworks_compare_case_insensitively() {
    assert_eq!(
        NuGetFramework::parse("net40-client"),
        NuGetFramework::parse("NET4.0-CLIENT")
    );
}

#[test]
fn name_comparer_ignores_version_and_profile() {
    let a = NuGetFramework::parse("net40-client");
    let b = NuGetFramework::parse("net45");

    assert!(NuGetFramework::name_comparer().equals(&a, &b));
    assert!(!NuGetFramework::comparer().equals(&a, &b));
}

#[test]
fn profile_comparer_ignores_identifier() {
    let a = NuGetFramework::parse("net40-wp71");
    let b = NuGetFramework::parse("sl4-wp71");

    assert!(NuGetFramework::profile_comparer().equals(&a, &b));
    assert!(!NuGetFramework::name_comparer().equals(&a, &b));
}

#[rstest]
#[case("net45")]
#[case("net")]
#[case("net40-client")]
#[case("net403")]
#[case("sl4-wp71")]
#[case("sl3-wp")]
#[case("netmf4")]
#[case("wpa81")]
#[case("aspnetcore50")]
#[case("native")]
#[case("monoandroid10")]
#[case("portable-net45+win8")]
#[case("portable-net45+sl5+win8+wp8")]
#[case("net35-custom")]
fn short_folder_name_round_trips(#[case] folder_name: &str) {
    let provider = default_name_provider();
    let parsed = NuGetFramework::parse_with(folder_name, provider);
    let rendered = parsed.short_folder_name(provider);

    assert_eq!(
        NuGetFramework::parse_with(&rendered, provider),
        parsed,
        "{folder_name} -> {rendered}"
    );
}

#[test]
fn every_short_name_entry_round_trips() {
    let provider = default_name_provider();
    let versions = [
        Version4::ZERO,
        Version4::new(1, 0, 0, 0),
        Version4::new(4, 5, 1, 0),
        Version4::new(10, 0, 0, 0),
    ];

    for identifier in [
        identifiers::NET,
        identifiers::NET_CORE,
        identifiers::NET_MICRO,
        identifiers::WINDOWS,
        identifiers::WINDOWS_PHONE,
        identifiers::WINDOWS_PHONE_APP,
        identifiers::SILVERLIGHT,
        identifiers::ASP_NET,
        identifiers::ASP_NET_CORE,
        identifiers::NATIVE,
        identifiers::MONO_ANDROID,
        identifiers::MONO_TOUCH,
        identifiers::MONO_MAC,
        identifiers::XAMARIN_IOS,
        identifiers::XAMARIN_MAC,
    ] {
        for version in versions {
            for profile in ["", profiles::CLIENT, profiles::WINDOWS_PHONE_71] {
                let framework = NuGetFramework::new(identifier, version, profile);
                let rendered = framework.short_folder_name(provider);

                assert_eq!(
                    NuGetFramework::parse_with(&rendered, provider),
                    framework,
                    "{framework} -> {rendered}"
                );
            }
        }
    }
}

#[test]
fn default_provider_is_shared() {
    assert!(std::ptr::eq(default_name_provider(), default_name_provider()));
    assert_eq!(
        default_name_provider().get_identifier("net"),
        Some(identifiers::NET.to_string())
    );
}

#[test]
fn default_provider_is_safe_under_concurrent_first_use() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| NuGetFramework::parse("portable-net45+win8")))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().profile(), "Profile7");
    }
}
