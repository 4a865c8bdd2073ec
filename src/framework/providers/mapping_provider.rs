//! Name provider backed by mapping tables
//!
//! All tables are indexed once at construction with lowercase keys, so
//! lookups are case-insensitive. Equivalences are mirrored in both directions.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::framework::comparer::{FrameworkFullComparer, FrameworkKey};
use crate::framework::constants::PORTABLE_SEPARATOR;
use crate::framework::mapping::{FrameworkMappings, PortableFrameworkMappings};
use crate::framework::nuget_framework::NuGetFramework;
use crate::framework::parser::{parse_folder_name, portable_profile_number};
use crate::framework::provider::FrameworkNameProvider;
use crate::framework::version::{Version4, parse_dotted};

/// Longest undotted version token; each digit is one component
const MAX_COMPACT_VERSION_DIGITS: usize = 4;

#[derive(Debug, Default)]
pub struct MappingNameProvider {
    /// lowercase synonym -> identifier
    synonyms: HashMap<String, String>,
    /// lowercase short name -> identifier
    identifiers_by_short: HashMap<String, String>,
    /// lowercase identifier -> identifier
    identifiers: HashMap<String, String>,
    /// lowercase identifier -> short name
    short_identifiers: HashMap<String, String>,
    /// lowercase short profile -> profile
    profiles_by_short: HashMap<String, String>,
    /// lowercase profile -> short profile
    short_profiles: HashMap<String, String>,
    equivalent_frameworks: HashMap<FrameworkKey, Vec<NuGetFramework>>,
    /// (lowercase framework, lowercase profile) -> equivalent profiles
    equivalent_profiles: HashMap<(String, String), Vec<String>>,
    portable_profiles: BTreeMap<u32, Vec<NuGetFramework>>,
}

impl MappingNameProvider {
    pub fn new<M, P>(mappings: &M, portable: &P) -> Self
    where
        M: FrameworkMappings + ?Sized,
        P: PortableFrameworkMappings + ?Sized,
    {
        let mut provider = Self::default();

        for (synonym, identifier) in mappings.identifier_synonyms() {
            provider
                .synonyms
                .insert(synonym.to_ascii_lowercase(), identifier.to_string());
            provider
                .identifiers
                .insert(identifier.to_ascii_lowercase(), identifier.to_string());
        }

        for (identifier, short_name) in mappings.identifier_short_names() {
            provider
                .identifiers_by_short
                .insert(short_name.to_ascii_lowercase(), identifier.to_string());
            provider
                .identifiers
                .insert(identifier.to_ascii_lowercase(), identifier.to_string());
            provider
                .short_identifiers
                .insert(identifier.to_ascii_lowercase(), short_name.to_string());
        }

        for (profile, short_name) in mappings.profile_short_names() {
            provider
                .profiles_by_short
                .insert(short_name.to_ascii_lowercase(), profile.to_string());
            provider
                .short_profiles
                .insert(profile.to_ascii_lowercase(), short_name.to_string());
        }

        for (a, b) in mappings.equivalent_frameworks() {
            provider.add_equivalent_framework(&a, &b);
            provider.add_equivalent_framework(&b, &a);
        }

        for (framework, a, b) in mappings.equivalent_profiles() {
            provider.add_equivalent_profile(framework, a, b);
            provider.add_equivalent_profile(framework, b, a);
        }

        for (number, frameworks) in portable.profile_frameworks() {
            provider
                .portable_profiles
                .insert(number, dedupe(frameworks.iter()));
        }

        debug!(
            "Indexed framework mappings: {} identifiers, {} profiles, {} portable profiles",
            provider.identifiers.len(),
            provider.profiles_by_short.len(),
            provider.portable_profiles.len()
        );

        provider
    }

    fn add_equivalent_framework(&mut self, framework: &NuGetFramework, equivalent: &NuGetFramework) {
        let entry = self
            .equivalent_frameworks
            .entry(FrameworkKey::new(framework.clone()))
            .or_default();
        if !entry.contains(equivalent) {
            entry.push(equivalent.clone());
        }
    }

    fn add_equivalent_profile(&mut self, framework: &str, profile: &str, equivalent: &str) {
        let entry = self
            .equivalent_profiles
            .entry((framework.to_ascii_lowercase(), profile.to_ascii_lowercase()))
            .or_default();
        if !entry.iter().any(|p| p.eq_ignore_ascii_case(equivalent)) {
            entry.push(equivalent.to_string());
        }
    }

    fn is_equivalent(&self, x: &NuGetFramework, y: &NuGetFramework) -> bool {
        x == y
            || self
                .equivalent_frameworks
                .get(&FrameworkKey::<FrameworkFullComparer>::new(x.clone()))
                .is_some_and(|equivalents| equivalents.contains(y))
    }

    /// Every member of each side has a match on the other side.
    ///
    /// Sizes may differ: members declared equivalent to each other
    /// (`win8`, `netcore45`) collapse onto the same counterpart.
    fn sets_match<F>(x: &[NuGetFramework], y: &[NuGetFramework], matches: F) -> bool
    where
        F: Fn(&NuGetFramework, &NuGetFramework) -> bool,
    {
        x.iter().all(|a| y.iter().any(|b| matches(a, b)))
            && y.iter().all(|b| x.iter().any(|a| matches(a, b)))
    }
}

fn dedupe<'a>(frameworks: impl Iterator<Item = &'a NuGetFramework>) -> Vec<NuGetFramework> {
    let mut seen: HashSet<FrameworkKey> = HashSet::new();
    frameworks
        .filter(|f| seen.insert(FrameworkKey::new((*f).clone())))
        .cloned()
        .collect()
}

impl FrameworkNameProvider for MappingNameProvider {
    fn get_identifier(&self, framework: &str) -> Option<String> {
        let key = framework.to_ascii_lowercase();

        // synonyms canonicalize before short name lookup
        self.synonyms
            .get(&key)
            .or_else(|| self.identifiers_by_short.get(&key))
            .or_else(|| self.identifiers.get(&key))
            .cloned()
    }

    fn get_short_identifier(&self, identifier: &str) -> Option<String> {
        self.short_identifiers
            .get(&identifier.to_ascii_lowercase())
            .cloned()
    }

    fn get_version(&self, version: &str) -> Option<Version4> {
        if version.is_empty() {
            return Some(Version4::ZERO);
        }

        if version.contains('.') {
            return parse_dotted(version);
        }

        if version.len() > MAX_COMPACT_VERSION_DIGITS
            || !version.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let mut components = [0u32; 4];
        for (slot, digit) in components.iter_mut().zip(version.bytes()) {
            *slot = u32::from(digit - b'0');
        }
        let [major, minor, build, revision] = components;
        Some(Version4::new(major, minor, build, revision))
    }

    fn get_version_string(&self, version: &Version4) -> String {
        if version.is_zero() {
            return String::new();
        }

        let mut components = version.components().to_vec();
        while components.len() > 1 && components.last() == Some(&0) {
            components.pop();
        }

        if components.iter().all(|c| *c < 10) {
            components.iter().map(|c| c.to_string()).collect()
        } else {
            // dotted form needs at least two components to stay unambiguous
            if components.len() < 2 {
                components.push(0);
            }
            components
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(".")
        }
    }

    fn get_profile(&self, profile: &str) -> String {
        self.profiles_by_short
            .get(&profile.to_ascii_lowercase())
            .cloned()
            .unwrap_or_else(|| profile.to_string())
    }

    fn get_short_profile(&self, profile: &str) -> Option<String> {
        self.short_profiles
            .get(&profile.to_ascii_lowercase())
            .cloned()
    }

    fn get_portable_frameworks(&self, profile: &str) -> Vec<NuGetFramework> {
        if let Some(number) = portable_profile_number(profile) {
            return self
                .get_portable_profile_frameworks(number)
                .unwrap_or_default();
        }

        let mut frameworks = Vec::new();
        for part in profile.split(PORTABLE_SEPARATOR).filter(|p| !p.is_empty()) {
            let framework = parse_folder_name(part, self);
            if framework.is_unsupported() {
                debug!("Unresolvable portable constituent '{}' in '{}'", part, profile);
                return Vec::new();
            }
            frameworks.push(framework);
        }
        frameworks
    }

    fn get_portable_profile(&self, frameworks: &[NuGetFramework]) -> Option<u32> {
        let frameworks = dedupe(frameworks.iter());
        if frameworks.is_empty() {
            return None;
        }

        // exact set first, then sets that differ only by declared equivalents.
        // Both sides are deduplicated, so the exact pass is set equality.
        // The lowest profile number wins either way
        self.portable_profiles
            .iter()
            .find(|(_, members)| Self::sets_match(&frameworks, members, |a, b| a == b))
            .or_else(|| {
                self.portable_profiles.iter().find(|(_, members)| {
                    Self::sets_match(&frameworks, members, |a, b| self.is_equivalent(a, b))
                })
            })
            .map(|(number, _)| *number)
    }

    fn get_portable_profile_frameworks(&self, profile_number: u32) -> Option<Vec<NuGetFramework>> {
        self.portable_profiles.get(&profile_number).cloned()
    }

    fn get_equivalent_frameworks(&self, framework: &NuGetFramework) -> Vec<NuGetFramework> {
        self.equivalent_frameworks
            .get(&FrameworkKey::<FrameworkFullComparer>::new(framework.clone()))
            .cloned()
            .unwrap_or_default()
    }

    fn get_equivalent_profiles(&self, framework: &str, profile: &str) -> Vec<String> {
        self.equivalent_profiles
            .get(&(framework.to_ascii_lowercase(), profile.to_ascii_lowercase()))
            .cloned()
            .unwrap_or_default()
    }
}
