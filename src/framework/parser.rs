//! Folder name parsing and rendering
//!
//! A folder name has three parts, only the first is required:
//! - framework: letters, `.` and `_` (`net`, `.NETFramework`, `portable`)
//! - version: digits, optionally dotted (`45`, `4.5`)
//! - profile: `-` followed by a profile (`-client`) or, for portable
//!   frameworks, a profile designator or `+` separated constituents
//!   (`-Profile7`, `-net45+win8`)

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::framework::constants::{
    PORTABLE_PROFILE_PREFIX, PORTABLE_SEPARATOR, PROFILE_SEPARATOR, identifiers,
};
use crate::framework::nuget_framework::NuGetFramework;
use crate::framework::provider::FrameworkNameProvider;

static FRAMEWORK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<framework>[A-Za-z_.]+)(?<version>[0-9]+(?:\.[0-9]+)*)?(?<profile>-[A-Za-z0-9_.+]+)?$",
    )
    .expect("framework folder regex is valid")
});

/// Parse a folder name into a framework, degrading to the unsupported
/// framework when the grammar, identifier or version cannot be resolved.
pub fn parse_folder_name<P>(folder_name: &str, provider: &P) -> NuGetFramework
where
    P: FrameworkNameProvider + ?Sized,
{
    let Some(caps) = FRAMEWORK_REGEX.captures(folder_name) else {
        debug!("'{}' is not a framework folder name", folder_name);
        return NuGetFramework::unsupported().clone();
    };

    let framework_token = caps.name("framework").map_or("", |m| m.as_str());
    let version_token = caps.name("version").map_or("", |m| m.as_str());
    let profile_token = caps
        .name("profile")
        .map_or("", |m| m.as_str())
        .trim_start_matches(PROFILE_SEPARATOR);

    let Some(framework) = provider.get_identifier(framework_token) else {
        debug!(
            "Unknown framework '{}' in '{}'",
            framework_token, folder_name
        );
        return NuGetFramework::unsupported().clone();
    };

    // a present but unparseable version fails the whole folder name
    let Some(version) = provider.get_version(version_token) else {
        debug!("Invalid version '{}' in '{}'", version_token, folder_name);
        return NuGetFramework::unsupported().clone();
    };

    if framework.eq_ignore_ascii_case(identifiers::PORTABLE) {
        let frameworks = provider.get_portable_frameworks(profile_token);

        // an unknown constituent set keeps the raw profile token
        let profile = match provider.get_portable_profile(&frameworks) {
            Some(profile_number) => portable_profile_name(profile_number),
            None => {
                debug!(
                    "No portable profile for '{}' in '{}'",
                    profile_token, folder_name
                );
                profile_token.to_string()
            }
        };

        return NuGetFramework::new(framework, version, profile);
    }

    let profile = if profile_token.is_empty() {
        String::new()
    } else {
        provider.get_profile(profile_token)
    };

    NuGetFramework::new(framework, version, profile)
}

/// Render the compact folder name of `framework` (ex: `net45-client`, `portable-net45+win8`)
pub fn short_folder_name<P>(framework: &NuGetFramework, provider: &P) -> String
where
    P: FrameworkNameProvider + ?Sized,
{
    let mut name = provider
        .get_short_identifier(framework.framework())
        .unwrap_or_else(|| framework.framework().to_string());
    name.push_str(&provider.get_version_string(framework.version()));

    let profile = framework.profile();
    if profile.is_empty() {
        return name;
    }

    name.push(PROFILE_SEPARATOR);

    let constituents = if framework.framework().eq_ignore_ascii_case(identifiers::PORTABLE) {
        portable_profile_number(profile)
            .and_then(|number| provider.get_portable_profile_frameworks(number))
    } else {
        None
    };

    match constituents {
        Some(frameworks) => {
            let mut parts: Vec<String> = frameworks
                .iter()
                .map(|f| short_folder_name(f, provider))
                .collect();
            parts.sort();
            name.push_str(&parts.join(&PORTABLE_SEPARATOR.to_string()));
        }
        None => {
            let short_profile = provider
                .get_short_profile(profile)
                .unwrap_or_else(|| profile.to_string());
            name.push_str(&short_profile);
        }
    }

    name
}

/// `7` -> `Profile7`
pub fn portable_profile_name(profile_number: u32) -> String {
    format!("{PORTABLE_PROFILE_PREFIX}{profile_number}")
}

/// `Profile7` -> `7`
pub fn portable_profile_number(profile: &str) -> Option<u32> {
    let prefix = profile.get(..PORTABLE_PROFILE_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(PORTABLE_PROFILE_PREFIX) {
        return None;
    }
    profile[PORTABLE_PROFILE_PREFIX.len()..].parse().ok()
}
