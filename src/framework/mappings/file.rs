//! Mapping tables loaded from a JSON document
//!
//! ```json
//! {
//!   "identifierSynonyms": { "NETFramework": ".NETFramework" },
//!   "identifierShortNames": { ".NETFramework": "net", "Windows": "win" },
//!   "profileShortNames": { "Client": "client" },
//!   "equivalentFrameworks": [
//!     [{ "framework": "Windows", "version": "8.0" }, { "framework": ".NETCore", "version": "4.5" }]
//!   ],
//!   "equivalentProfiles": [
//!     { "framework": ".NETFramework", "profile": "Client", "equivalentProfile": "" }
//!   ],
//!   "portableProfiles": {
//!     "7": [{ "framework": ".NETFramework", "version": "4.5" }, { "framework": "Windows", "version": "8.0" }]
//!   }
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

use crate::framework::error::FrameworkError;
use crate::framework::mapping::{FrameworkMappings, PortableFrameworkMappings};
use crate::framework::nuget_framework::NuGetFramework;
use crate::framework::version::Version4;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
struct MappingsDocument {
    identifier_synonyms: IndexMap<String, String>,
    identifier_short_names: IndexMap<String, String>,
    profile_short_names: IndexMap<String, String>,
    equivalent_frameworks: Vec<[FrameworkEntry; 2]>,
    equivalent_profiles: Vec<ProfileEquivalence>,
    portable_profiles: IndexMap<u32, Vec<FrameworkEntry>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct FrameworkEntry {
    framework: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    profile: String,
}

impl FrameworkEntry {
    fn to_framework(&self) -> Result<NuGetFramework, FrameworkError> {
        if self.framework.is_empty() {
            return Err(FrameworkError::InvalidMapping(
                "framework entry without identifier".to_string(),
            ));
        }

        let version = match &self.version {
            Some(version) => version.parse::<Version4>()?,
            None => Version4::ZERO,
        };

        Ok(NuGetFramework::new(
            self.framework.clone(),
            version,
            self.profile.clone(),
        ))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ProfileEquivalence {
    framework: String,
    profile: String,
    equivalent_profile: String,
}

/// Mapping tables read from a user supplied file, replacing the built-in tables
#[derive(Debug, Clone, Default)]
pub struct FileFrameworkMappings {
    identifier_synonyms: Vec<(String, String)>,
    identifier_short_names: Vec<(String, String)>,
    profile_short_names: Vec<(String, String)>,
    equivalent_frameworks: Vec<(NuGetFramework, NuGetFramework)>,
    equivalent_profiles: Vec<(String, String, String)>,
    portable_profiles: Vec<(u32, Vec<NuGetFramework>)>,
}

impl FileFrameworkMappings {
    /// Read and validate a mappings file
    pub fn load(path: &Path) -> Result<Self, FrameworkError> {
        let content = std::fs::read_to_string(path).map_err(|source| FrameworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, FrameworkError> {
        let document: MappingsDocument = serde_json::from_str(content)?;
        Self::from_document(document)
    }

    fn from_document(document: MappingsDocument) -> Result<Self, FrameworkError> {
        let mut equivalent_frameworks = Vec::with_capacity(document.equivalent_frameworks.len());
        for [a, b] in &document.equivalent_frameworks {
            let (a, b) = (a.to_framework()?, b.to_framework()?);
            if a == b {
                warn!("Skipping framework equivalence of {} with itself", a);
                continue;
            }
            equivalent_frameworks.push((a, b));
        }

        let mut portable_profiles = Vec::with_capacity(document.portable_profiles.len());
        for (number, entries) in &document.portable_profiles {
            if entries.is_empty() {
                return Err(FrameworkError::InvalidMapping(format!(
                    "portable profile {number} has no frameworks"
                )));
            }
            let frameworks = entries
                .iter()
                .map(FrameworkEntry::to_framework)
                .collect::<Result<Vec<_>, _>>()?;
            portable_profiles.push((*number, frameworks));
        }

        for (identifier, short_name) in &document.identifier_short_names {
            if identifier.is_empty() || short_name.is_empty() {
                return Err(FrameworkError::InvalidMapping(format!(
                    "empty identifier short name entry '{identifier}' -> '{short_name}'"
                )));
            }
        }

        Ok(Self {
            identifier_synonyms: document.identifier_synonyms.into_iter().collect(),
            identifier_short_names: document.identifier_short_names.into_iter().collect(),
            profile_short_names: document.profile_short_names.into_iter().collect(),
            equivalent_frameworks,
            equivalent_profiles: document
                .equivalent_profiles
                .into_iter()
                .map(|e| (e.framework, e.profile, e.equivalent_profile))
                .collect(),
            portable_profiles,
        })
    }
}

fn borrow_pairs(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
    pairs
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect()
}

impl FrameworkMappings for FileFrameworkMappings {
    fn identifier_synonyms(&self) -> Vec<(&str, &str)> {
        borrow_pairs(&self.identifier_synonyms)
    }

    fn identifier_short_names(&self) -> Vec<(&str, &str)> {
        borrow_pairs(&self.identifier_short_names)
    }

    fn profile_short_names(&self) -> Vec<(&str, &str)> {
        borrow_pairs(&self.profile_short_names)
    }

    fn equivalent_frameworks(&self) -> Vec<(NuGetFramework, NuGetFramework)> {
        self.equivalent_frameworks.clone()
    }

    fn equivalent_profiles(&self) -> Vec<(&str, &str, &str)> {
        self.equivalent_profiles
            .iter()
            .map(|(f, a, b)| (f.as_str(), a.as_str(), b.as_str()))
            .collect()
    }
}

impl PortableFrameworkMappings for FileFrameworkMappings {
    fn profile_frameworks(&self) -> Vec<(u32, Vec<NuGetFramework>)> {
        self.portable_profiles.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_reads_all_tables() {
        let mappings = FileFrameworkMappings::from_json(
            &json!({
                "identifierSynonyms": { "NETFramework": ".NETFramework" },
                "identifierShortNames": { ".NETFramework": "net", "Windows": "win" },
                "profileShortNames": { "Client": "client" },
                "equivalentFrameworks": [
                    [
                        { "framework": "Windows", "version": "8.0" },
                        { "framework": ".NETCore", "version": "4.5" }
                    ]
                ],
                "equivalentProfiles": [
                    { "framework": ".NETFramework", "profile": "Client", "equivalentProfile": "" }
                ],
                "portableProfiles": {
                    "7": [
                        { "framework": ".NETFramework", "version": "4.5" },
                        { "framework": "Windows", "version": "8" }
                    ]
                }
            })
            .to_string(),
        )
        .unwrap();

        assert_eq!(
            mappings.identifier_short_names(),
            vec![(".NETFramework", "net"), ("Windows", "win")]
        );
        assert_eq!(
            mappings.identifier_synonyms(),
            vec![("NETFramework", ".NETFramework")]
        );
        assert_eq!(mappings.profile_short_names(), vec![("Client", "client")]);
        assert_eq!(
            mappings.equivalent_frameworks(),
            vec![(
                NuGetFramework::with_version("Windows", (8, 0)),
                NuGetFramework::with_version(".NETCore", (4, 5)),
            )]
        );
        assert_eq!(
            mappings.equivalent_profiles(),
            vec![(".NETFramework", "Client", "")]
        );
        assert_eq!(
            mappings.profile_frameworks(),
            vec![(
                7,
                vec![
                    NuGetFramework::with_version(".NETFramework", (4, 5)),
                    NuGetFramework::with_version("Windows", (8, 0)),
                ]
            )]
        );
    }

    #[test]
    fn from_json_missing_tables_default_to_empty() {
        let mappings = FileFrameworkMappings::from_json("{}").unwrap();

        assert!(mappings.identifier_short_names().is_empty());
        assert!(mappings.profile_frameworks().is_empty());
    }

    #[test]
    fn from_json_rejects_invalid_version() {
        let result = FileFrameworkMappings::from_json(
            &json!({
                "portableProfiles": { "7": [{ "framework": "Windows", "version": "eight" }] }
            })
            .to_string(),
        );

        assert!(matches!(result, Err(FrameworkError::InvalidVersion(v)) if v == "eight"));
    }

    #[test]
    fn from_json_rejects_empty_portable_profile() {
        let result = FileFrameworkMappings::from_json(r#"{ "portableProfiles": { "7": [] } }"#);

        assert!(matches!(result, Err(FrameworkError::InvalidMapping(_))));
    }

    #[test]
    fn from_json_rejects_empty_short_name() {
        let result =
            FileFrameworkMappings::from_json(r#"{ "identifierShortNames": { ".NETFramework": "" } }"#);

        assert!(matches!(result, Err(FrameworkError::InvalidMapping(_))));
    }

    #[test]
    fn from_json_skips_self_equivalence() {
        let mappings = FileFrameworkMappings::from_json(
            &json!({
                "equivalentFrameworks": [
                    [{ "framework": "win", "version": "8" }, { "framework": "WIN", "version": "8.0" }]
                ]
            })
            .to_string(),
        )
        .unwrap();

        assert!(mappings.equivalent_frameworks().is_empty());
    }

    #[test]
    fn from_json_malformed_document_is_json_error() {
        let result = FileFrameworkMappings::from_json("{ not json");

        assert!(matches!(result, Err(FrameworkError::Json(_))));
    }
}
