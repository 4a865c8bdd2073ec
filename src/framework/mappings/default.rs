//! Built-in mapping tables

use crate::framework::constants::{identifiers, profiles};
use crate::framework::mapping::{FrameworkMappings, PortableFrameworkMappings};
use crate::framework::nuget_framework::NuGetFramework;
use crate::framework::version::Version4;

/// (identifier, version, profile)
type FrameworkTuple = (&'static str, Version4, &'static str);

const fn fw(identifier: &'static str, major: u32, minor: u32, build: u32) -> FrameworkTuple {
    (identifier, Version4::new(major, minor, build, 0), "")
}

const NET4: FrameworkTuple = fw(identifiers::NET, 4, 0, 0);
const NET403: FrameworkTuple = fw(identifiers::NET, 4, 0, 3);
const NET45: FrameworkTuple = fw(identifiers::NET, 4, 5, 0);
const NET451: FrameworkTuple = fw(identifiers::NET, 4, 5, 1);
const SL4: FrameworkTuple = fw(identifiers::SILVERLIGHT, 4, 0, 0);
const SL5: FrameworkTuple = fw(identifiers::SILVERLIGHT, 5, 0, 0);
const WIN: FrameworkTuple = fw(identifiers::WINDOWS, 0, 0, 0);
const WIN8: FrameworkTuple = fw(identifiers::WINDOWS, 8, 0, 0);
const WIN81: FrameworkTuple = fw(identifiers::WINDOWS, 8, 1, 0);
const NETCORE45: FrameworkTuple = fw(identifiers::NET_CORE, 4, 5, 0);
const NETCORE451: FrameworkTuple = fw(identifiers::NET_CORE, 4, 5, 1);
const WP: FrameworkTuple = fw(identifiers::WINDOWS_PHONE, 0, 0, 0);
const WP7: FrameworkTuple = fw(identifiers::WINDOWS_PHONE, 7, 0, 0);
const WP71: FrameworkTuple = fw(identifiers::WINDOWS_PHONE, 7, 1, 0);
const WP75: FrameworkTuple = fw(identifiers::WINDOWS_PHONE, 7, 5, 0);
const WP8: FrameworkTuple = fw(identifiers::WINDOWS_PHONE, 8, 0, 0);
const WP81: FrameworkTuple = fw(identifiers::WINDOWS_PHONE, 8, 1, 0);
const WPA: FrameworkTuple = fw(identifiers::WINDOWS_PHONE_APP, 0, 0, 0);
const WPA81: FrameworkTuple = fw(identifiers::WINDOWS_PHONE_APP, 8, 1, 0);
const SL3_WP: FrameworkTuple = (
    identifiers::SILVERLIGHT,
    Version4::new(3, 0, 0, 0),
    profiles::WINDOWS_PHONE,
);
const SL4_WP71: FrameworkTuple = (
    identifiers::SILVERLIGHT,
    Version4::new(4, 0, 0, 0),
    profiles::WINDOWS_PHONE_71,
);
const SL8_WP: FrameworkTuple = (
    identifiers::SILVERLIGHT,
    Version4::new(8, 0, 0, 0),
    profiles::WINDOWS_PHONE,
);

const IDENTIFIER_SYNONYMS: &[(&str, &str)] = &[
    (".NET", identifiers::NET),
    ("NETFramework", identifiers::NET),
    ("NETCore", identifiers::NET_CORE),
    ("WinRT", identifiers::NET_CORE),
    ("NETMicroFramework", identifiers::NET_MICRO),
    (".NETPortable", identifiers::PORTABLE),
    ("NETPortable", identifiers::PORTABLE),
    ("WindowsStore", identifiers::WINDOWS),
];

const IDENTIFIER_SHORT_NAMES: &[(&str, &str)] = &[
    (identifiers::NET, "net"),
    (identifiers::NET_CORE, "netcore"),
    (identifiers::NET_MICRO, "netmf"),
    (identifiers::PORTABLE, "portable"),
    (identifiers::WINDOWS, "win"),
    (identifiers::WINDOWS_PHONE, "wp"),
    (identifiers::WINDOWS_PHONE_APP, "wpa"),
    (identifiers::SILVERLIGHT, "sl"),
    (identifiers::ASP_NET, "aspnet"),
    (identifiers::ASP_NET_CORE, "aspnetcore"),
    (identifiers::NATIVE, "native"),
    (identifiers::MONO_ANDROID, "monoandroid"),
    (identifiers::MONO_TOUCH, "monotouch"),
    (identifiers::MONO_MAC, "monomac"),
    (identifiers::XAMARIN_IOS, "xamarinios"),
    (identifiers::XAMARIN_MAC, "xamarinmac"),
];

const PROFILE_SHORT_NAMES: &[(&str, &str)] = &[
    (profiles::CLIENT, "client"),
    (profiles::FULL, "full"),
    (profiles::COMPACT_FRAMEWORK, "cf"),
    (profiles::WINDOWS_PHONE, "wp"),
    (profiles::WINDOWS_PHONE_71, "wp71"),
];

const EQUIVALENT_FRAMEWORKS: &[(FrameworkTuple, FrameworkTuple)] = &[
    // win <-> win8
    (WIN, WIN8),
    // win8 <-> netcore45
    (WIN8, NETCORE45),
    // win81 <-> netcore451
    (WIN81, NETCORE451),
    // wp <-> wp7
    (WP, WP7),
    // wp7 <-> sl3-wp
    (WP7, SL3_WP),
    // wp71 <-> sl4-wp71
    (WP71, SL4_WP71),
    // wp8 <-> sl8-wp
    (WP8, SL8_WP),
    // wpa <-> wpa81
    (WPA, WPA81),
];

const EQUIVALENT_PROFILES: &[(&str, &str, &str)] = &[
    (identifiers::NET, profiles::CLIENT, ""),
    (identifiers::NET, profiles::FULL, ""),
    (
        identifiers::SILVERLIGHT,
        profiles::WINDOWS_PHONE_71,
        profiles::WINDOWS_PHONE,
    ),
    (
        identifiers::WINDOWS_PHONE,
        profiles::WINDOWS_PHONE_71,
        profiles::WINDOWS_PHONE,
    ),
];

const PORTABLE_PROFILES: &[(u32, &[FrameworkTuple])] = &[
    (2, &[NET4, WIN8, SL4, WP7]),
    (3, &[NET4, SL4]),
    (4, &[NET45, SL4, WIN8, WP7]),
    (5, &[NET4, WIN8]),
    (6, &[NET403, WIN8]),
    (7, &[NET45, WIN8]),
    (14, &[NET4, SL5]),
    (18, &[NET403, SL4]),
    (19, &[NET403, SL5]),
    (23, &[NET45, SL4]),
    (24, &[NET45, SL5]),
    (31, &[WIN81, WP81]),
    (32, &[WIN81, WPA81]),
    (36, &[NET4, SL4, WIN8, WP8]),
    (37, &[NET4, SL5, WIN8]),
    (41, &[NET403, SL4, WIN8]),
    (42, &[NET403, SL5, WIN8]),
    (44, &[NET451, WIN81]),
    (46, &[NET45, SL4, WIN8]),
    (47, &[NET45, SL5, WIN8]),
    (49, &[NET45, WP8]),
    (78, &[NET45, WIN8, WP8]),
    (84, &[WP81, WPA81]),
    (88, &[NET4, SL4, WIN8, WP75]),
    (92, &[NET4, WIN8, WPA81]),
    (95, &[NET403, SL4, WIN8, WP7]),
    (96, &[NET403, SL4, WIN8, WP75]),
    (102, &[NET403, WIN8, WPA81]),
    (104, &[NET45, SL4, WIN8, WP75]),
    (111, &[NET45, WIN8, WPA81]),
    (136, &[NET4, SL5, WIN8, WP8]),
    (143, &[NET403, SL4, WIN8, WP8]),
    (147, &[NET403, SL5, WIN8, WP8]),
    (151, &[NET451, WIN81, WPA81]),
    (154, &[NET45, SL4, WIN8, WP8]),
    (157, &[WIN81, WP81, WPA81]),
    (158, &[NET45, SL5, WIN8, WP8]),
    (225, &[NET4, SL5, WIN8, WPA81]),
    (240, &[NET403, SL5, WIN8, WPA81]),
    (255, &[NET45, SL5, WIN8, WPA81]),
    (259, &[NET45, WIN8, WPA81, WP8]),
    (328, &[NET4, SL5, WIN8, WPA81, WP8]),
    (336, &[NET403, SL5, WIN8, WPA81, WP8]),
    (344, &[NET45, SL5, WIN8, WPA81, WP8]),
];

fn to_framework((identifier, version, profile): &FrameworkTuple) -> NuGetFramework {
    NuGetFramework::new(*identifier, *version, *profile)
}

/// The package ecosystem's standard framework tables
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFrameworkMappings;

impl FrameworkMappings for DefaultFrameworkMappings {
    fn identifier_synonyms(&self) -> Vec<(&str, &str)> {
        IDENTIFIER_SYNONYMS.to_vec()
    }

    fn identifier_short_names(&self) -> Vec<(&str, &str)> {
        IDENTIFIER_SHORT_NAMES.to_vec()
    }

    fn profile_short_names(&self) -> Vec<(&str, &str)> {
        PROFILE_SHORT_NAMES.to_vec()
    }

    fn equivalent_frameworks(&self) -> Vec<(NuGetFramework, NuGetFramework)> {
        EQUIVALENT_FRAMEWORKS
            .iter()
            .map(|(a, b)| (to_framework(a), to_framework(b)))
            .collect()
    }

    fn equivalent_profiles(&self) -> Vec<(&str, &str, &str)> {
        EQUIVALENT_PROFILES.to_vec()
    }
}

impl PortableFrameworkMappings for DefaultFrameworkMappings {
    fn profile_frameworks(&self) -> Vec<(u32, Vec<NuGetFramework>)> {
        PORTABLE_PROFILES
            .iter()
            .map(|(number, frameworks)| (*number, frameworks.iter().map(to_framework).collect()))
            .collect()
    }
}
