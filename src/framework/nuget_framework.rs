//! Framework identity value type

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::framework::comparer::{
    FrameworkComparer, FrameworkFullComparer, FrameworkNameComparer, FrameworkProfileComparer,
};
use crate::framework::constants::identifiers;
use crate::framework::parser;
use crate::framework::provider::FrameworkNameProvider;
use crate::framework::providers::default_name_provider;
use crate::framework::version::Version4;

static UNSUPPORTED_FRAMEWORK: NuGetFramework = NuGetFramework::sentinel(identifiers::UNSUPPORTED);
static EMPTY_FRAMEWORK: NuGetFramework = NuGetFramework::sentinel(identifiers::EMPTY);
static ANY_FRAMEWORK: NuGetFramework = NuGetFramework::sentinel(identifiers::ANY);

/// A target framework: identifier, normalized version and optional profile.
///
/// Values are immutable. Equality and hashing follow [`FrameworkFullComparer`]:
/// identifier and profile compare case-insensitively, versions component-wise.
#[derive(Debug, Clone)]
pub struct NuGetFramework {
    framework: Cow<'static, str>,
    version: Version4,
    profile: Cow<'static, str>,
}

impl NuGetFramework {
    /// Create a framework from all three parts. Negative version components become zero.
    pub fn new(
        framework: impl Into<String>,
        version: impl Into<Version4>,
        profile: impl Into<String>,
    ) -> Self {
        Self {
            framework: Cow::Owned(framework.into()),
            version: version.into(),
            profile: Cow::Owned(profile.into()),
        }
    }

    /// Create a framework without a profile
    pub fn with_version(framework: impl Into<String>, version: impl Into<Version4>) -> Self {
        Self::new(framework, version, String::new())
    }

    /// Create a framework matching all versions of `framework` (ex: `net`)
    pub fn from_identifier(framework: impl Into<String>) -> Self {
        Self::new(framework, Version4::ZERO, String::new())
    }

    const fn sentinel(framework: &'static str) -> Self {
        Self {
            framework: Cow::Borrowed(framework),
            version: Version4::ZERO,
            profile: Cow::Borrowed(""),
        }
    }

    /// The framework returned for folder names that are not framework folders
    pub fn unsupported() -> &'static NuGetFramework {
        &UNSUPPORTED_FRAMEWORK
    }

    pub fn empty() -> &'static NuGetFramework {
        &EMPTY_FRAMEWORK
    }

    pub fn any() -> &'static NuGetFramework {
        &ANY_FRAMEWORK
    }

    /// Parse a folder name (ex: `net45`, `portable-net45+win8`) with the default mappings.
    ///
    /// Never fails: anything that is not a recognizable framework folder yields
    /// [`NuGetFramework::unsupported`].
    pub fn parse(folder_name: &str) -> NuGetFramework {
        Self::parse_with(folder_name, default_name_provider())
    }

    /// Parse a folder name with the given name provider
    pub fn parse_with<P>(folder_name: &str, provider: &P) -> NuGetFramework
    where
        P: FrameworkNameProvider + ?Sized,
    {
        parser::parse_folder_name(folder_name, provider)
    }

    /// Render the compact folder form (ex: `net45-client`), the inverse of [`Self::parse_with`]
    pub fn short_folder_name<P>(&self, provider: &P) -> String
    where
        P: FrameworkNameProvider + ?Sized,
    {
        parser::short_folder_name(self, provider)
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn version(&self) -> &Version4 {
        &self.version
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Display form: `.NETFramework, Version=v4.5.1, Profile=Client`
    ///
    /// Build is shown only when build or revision is set, revision only when set.
    /// The profile segment is omitted when there is no profile.
    pub fn full_framework_name(&self) -> String {
        let version = &self.version;
        let mut version_part = format!("Version=v{}.{}", version.major, version.minor);

        if version.build > 0 || version.revision > 0 {
            version_part.push_str(&format!(".{}", version.build));

            if version.revision > 0 {
                version_part.push_str(&format!(".{}", version.revision));
            }
        }

        let mut parts = vec![self.framework.to_string(), version_part];
        if !self.profile.is_empty() {
            parts.push(format!("Profile={}", self.profile));
        }

        parts.join(", ")
    }

    /// True for portable class library frameworks without a version
    pub fn is_pcl(&self) -> bool {
        self.version.major == 0 && self.framework.eq_ignore_ascii_case(identifiers::PORTABLE)
    }

    /// True if this framework matches all versions of its identifier (ex: `net`)
    pub fn all_versions(&self) -> bool {
        self.version.is_zero()
    }

    pub fn is_unsupported(&self) -> bool {
        *self == UNSUPPORTED_FRAMEWORK
    }

    /// True if this is the EMPTY framework
    pub fn is_empty(&self) -> bool {
        *self == EMPTY_FRAMEWORK
    }

    /// True if this is the ANY framework
    pub fn is_any(&self) -> bool {
        *self == ANY_FRAMEWORK
    }

    pub fn is_specific_framework(&self) -> bool {
        !self.is_empty() && !self.is_any() && !self.is_unsupported()
    }

    /// Identifier, version and profile comparison
    pub fn comparer() -> FrameworkFullComparer {
        FrameworkFullComparer
    }

    /// Identifier only comparison
    pub fn name_comparer() -> FrameworkNameComparer {
        FrameworkNameComparer
    }

    /// Profile only comparison
    pub fn profile_comparer() -> FrameworkProfileComparer {
        FrameworkProfileComparer
    }
}

impl PartialEq for NuGetFramework {
    fn eq(&self, other: &Self) -> bool {
        FrameworkFullComparer.equals(self, other)
    }
}

impl Eq for NuGetFramework {}

impl Hash for NuGetFramework {
    fn hash<H: Hasher>(&self, state: &mut H) {
        FrameworkFullComparer.hash(self, state);
    }
}

impl fmt::Display for NuGetFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_framework_name())
    }
}
