//! Raw framework mapping tables
//!
//! Implementations only supply the minimum set of pairs; the name provider
//! indexes them and mirrors them where a reverse lookup is needed.

use crate::framework::nuget_framework::NuGetFramework;

/// Identifier, profile and equivalence tables
pub trait FrameworkMappings: Send + Sync {
    /// Synonym -> Identifier
    /// Ex: NETFramework -> .NETFramework
    fn identifier_synonyms(&self) -> Vec<(&str, &str)>;

    /// Identifier -> short name
    /// Ex: .NETFramework -> net
    fn identifier_short_names(&self) -> Vec<(&str, &str)>;

    /// Profile -> short name
    /// Ex: WindowsPhone -> wp
    fn profile_short_names(&self) -> Vec<(&str, &str)>;

    /// Frameworks with the same surface
    /// Ex: Windows 8.0 <-> NetCore 4.5
    fn equivalent_frameworks(&self) -> Vec<(NuGetFramework, NuGetFramework)>;

    /// (Framework, profile, equivalent profile)
    /// Ex: Silverlight, WindowsPhone71, WindowsPhone
    fn equivalent_profiles(&self) -> Vec<(&str, &str, &str)>;
}

/// Portable profile table
pub trait PortableFrameworkMappings: Send + Sync {
    /// Profile number -> constituent frameworks
    /// Ex: 7 -> [net45, win8]
    fn profile_frameworks(&self) -> Vec<(u32, Vec<NuGetFramework>)>;
}
