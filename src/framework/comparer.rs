//! Equality relations over frameworks
//!
//! Three independent relations, each with a consistent hash:
//! - [`FrameworkFullComparer`]: identifier, version and profile
//! - [`FrameworkNameComparer`]: identifier only
//! - [`FrameworkProfileComparer`]: profile only
//!
//! Identifiers and profiles compare ASCII case-insensitively.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::framework::nuget_framework::NuGetFramework;

/// An equivalence relation over frameworks with a matching hash function.
///
/// Frameworks that are equal under `equals` must feed identical data to `hash`.
pub trait FrameworkComparer {
    fn equals(&self, x: &NuGetFramework, y: &NuGetFramework) -> bool;

    fn hash<H: Hasher>(&self, framework: &NuGetFramework, state: &mut H);

    /// Convenience hash code using the std default hasher
    fn hash_code(&self, framework: &NuGetFramework) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(framework, &mut hasher);
        hasher.finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameworkFullComparer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameworkNameComparer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameworkProfileComparer;

impl FrameworkComparer for FrameworkFullComparer {
    fn equals(&self, x: &NuGetFramework, y: &NuGetFramework) -> bool {
        x.framework().eq_ignore_ascii_case(y.framework())
            && x.version() == y.version()
            && x.profile().eq_ignore_ascii_case(y.profile())
    }

    fn hash<H: Hasher>(&self, framework: &NuGetFramework, state: &mut H) {
        hash_ignore_case(framework.framework(), state);
        framework.version().hash(state);
        hash_ignore_case(framework.profile(), state);
    }
}

impl FrameworkComparer for FrameworkNameComparer {
    fn equals(&self, x: &NuGetFramework, y: &NuGetFramework) -> bool {
        x.framework().eq_ignore_ascii_case(y.framework())
    }

    fn hash<H: Hasher>(&self, framework: &NuGetFramework, state: &mut H) {
        hash_ignore_case(framework.framework(), state);
    }
}

impl FrameworkComparer for FrameworkProfileComparer {
    fn equals(&self, x: &NuGetFramework, y: &NuGetFramework) -> bool {
        x.profile().eq_ignore_ascii_case(y.profile())
    }

    fn hash<H: Hasher>(&self, framework: &NuGetFramework, state: &mut H) {
        hash_ignore_case(framework.profile(), state);
    }
}

fn hash_ignore_case<H: Hasher>(value: &str, state: &mut H) {
    for byte in value.bytes() {
        state.write_u8(byte.to_ascii_lowercase());
    }
    // terminator keeps ("ab", "c") and ("a", "bc") apart
    state.write_u8(0xff);
}

/// Owned framework wrapper whose `Eq`/`Hash` follow comparer `C`,
/// so any relation can key a `HashMap` or `HashSet`.
#[derive(Debug, Clone)]
pub struct FrameworkKey<C: FrameworkComparer = FrameworkFullComparer> {
    framework: NuGetFramework,
    comparer: PhantomData<C>,
}

impl<C: FrameworkComparer> FrameworkKey<C> {
    pub fn new(framework: NuGetFramework) -> Self {
        Self {
            framework,
            comparer: PhantomData,
        }
    }

    pub fn framework(&self) -> &NuGetFramework {
        &self.framework
    }

    pub fn into_inner(self) -> NuGetFramework {
        self.framework
    }
}

impl<C: FrameworkComparer + Default> PartialEq for FrameworkKey<C> {
    fn eq(&self, other: &Self) -> bool {
        C::default().equals(&self.framework, &other.framework)
    }
}

impl<C: FrameworkComparer + Default> Eq for FrameworkKey<C> {}

impl<C: FrameworkComparer + Default> Hash for FrameworkKey<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        C::default().hash(&self.framework, state);
    }
}
