//! Four-component framework version

use std::fmt;
use std::str::FromStr;

use crate::framework::error::FrameworkError;

/// A normalized framework version: major.minor.build.revision, never negative.
///
/// Unset components are represented as zero, so `4.5` and `4.5.0.0` are the
/// same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version4 {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl Version4 {
    /// The all-zero version, meaning "every version of this identifier"
    pub const ZERO: Version4 = Version4::new(0, 0, 0, 0);

    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Coerce arbitrary signed components into a valid version.
    ///
    /// Negative components (the "unset" marker of other version models) become
    /// zero; components beyond `u32::MAX` saturate.
    ///
    /// Examples:
    /// - (4, 5, -1, -1) -> 4.5.0.0
    /// - (-3, 2, 0, 7) -> 0.2.0.7
    pub fn normalize(major: i64, minor: i64, build: i64, revision: i64) -> Self {
        Self::new(
            clamp_component(major),
            clamp_component(minor),
            clamp_component(build),
            clamp_component(revision),
        )
    }

    /// True if every component is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Components in order, for callers that need to iterate
    pub fn components(&self) -> [u32; 4] {
        [self.major, self.minor, self.build, self.revision]
    }
}

fn clamp_component(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

impl From<(i64, i64)> for Version4 {
    fn from((major, minor): (i64, i64)) -> Self {
        Self::normalize(major, minor, 0, 0)
    }
}

impl From<(i64, i64, i64)> for Version4 {
    fn from((major, minor, build): (i64, i64, i64)) -> Self {
        Self::normalize(major, minor, build, 0)
    }
}

impl From<(i64, i64, i64, i64)> for Version4 {
    fn from((major, minor, build, revision): (i64, i64, i64, i64)) -> Self {
        Self::normalize(major, minor, build, revision)
    }
}

impl fmt::Display for Version4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Parses dotted versions with one to four numeric components ("4", "4.5", "4.5.1.2").
impl FromStr for Version4 {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dotted(s).ok_or_else(|| FrameworkError::InvalidVersion(s.to_string()))
    }
}

pub(crate) fn parse_dotted(s: &str) -> Option<Version4> {
    let parts: Vec<&str> = s.trim().split('.').collect();
    if parts.len() > 4 {
        return None;
    }

    let mut components = [0u32; 4];
    for (slot, part) in components.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }

    let [major, minor, build, revision] = components;
    Some(Version4::new(major, minor, build, revision))
}
