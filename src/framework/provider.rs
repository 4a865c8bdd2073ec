//! Name provider trait
//!
//! Resolves the raw tokens of a folder name (identifier, version, profile)
//! to canonical values, and answers the reverse and equivalence lookups
//! needed to render and relate frameworks.

#[cfg(test)]
use mockall::automock;

use crate::framework::nuget_framework::NuGetFramework;
use crate::framework::version::Version4;

#[cfg_attr(test, automock)]
pub trait FrameworkNameProvider: Send + Sync {
    /// Canonical identifier for a short name, synonym or identifier
    /// Ex: net -> .NETFramework
    fn get_identifier(&self, framework: &str) -> Option<String>;

    /// Short name of a canonical identifier
    /// Ex: .NETFramework -> net
    fn get_short_identifier(&self, identifier: &str) -> Option<String>;

    /// Version for a folder name version token.
    ///
    /// An empty token yields the zero version; `None` means the token is present
    /// but unparseable.
    fn get_version(&self, version: &str) -> Option<Version4>;

    /// Compact version token, the inverse of [`Self::get_version`]
    /// Ex: 4.5.1.0 -> 451
    fn get_version_string(&self, version: &Version4) -> String;

    /// Canonical profile for a short profile, or the token itself when unknown
    /// Ex: client -> Client
    fn get_profile(&self, profile: &str) -> String;

    /// Short name of a canonical profile
    fn get_short_profile(&self, profile: &str) -> Option<String>;

    /// Constituent frameworks of a portable profile token.
    ///
    /// Accepts a profile designator (`Profile7`) or a `+` separated list of
    /// short folder names (`net45+win8`). Returns an empty list when the
    /// token cannot be resolved.
    fn get_portable_frameworks(&self, profile: &str) -> Vec<NuGetFramework>;

    /// Portable profile number whose constituent set is `frameworks`,
    /// independent of order and duplicates
    fn get_portable_profile(&self, frameworks: &[NuGetFramework]) -> Option<u32>;

    /// Constituent frameworks of a portable profile number
    fn get_portable_profile_frameworks(&self, profile_number: u32) -> Option<Vec<NuGetFramework>>;

    /// Frameworks declared interchangeable with `framework`
    fn get_equivalent_frameworks(&self, framework: &NuGetFramework) -> Vec<NuGetFramework>;

    /// Profiles of `framework` declared interchangeable with `profile`
    fn get_equivalent_profiles(&self, framework: &str, profile: &str) -> Vec<String>;
}
