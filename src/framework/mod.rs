//! Target framework identity model
//!
//! Turns folder names such as `net45` or `portable-net45+win8` into comparable
//! framework identities: identifier, normalized version and optional profile.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │   Mapping   │────▶│  Provider   │◀────│      Parser      │
//! │  (tables)   │     │  (lookups)  │     │ (folder -> value)│
//! └─────────────┘     └─────────────┘     └──────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌─────────────┐                         ┌──────────────────┐
//! │  Mappings   │                         │  NuGetFramework  │
//! │ (built-in,  │                         │   + Comparers    │
//! │    file)    │                         │                  │
//! └─────────────┘                         └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`nuget_framework`]: The immutable framework value and its sentinels
//! - [`comparer`]: Full, name-only and profile-only equality relations
//! - [`parser`]: Folder name grammar, parsing and short name rendering
//! - [`provider`]: Name provider trait used while parsing
//! - [`providers`]: Provider over mapping tables, and the process-wide default
//! - [`mapping`]: Raw mapping table traits
//! - [`mappings`]: Built-in tables and tables loaded from a file
//! - [`version`]: Four-component normalized version
//! - [`constants`]: Well-known identifiers and profiles
//! - [`error`]: Error type for hard failures

pub mod comparer;
pub mod constants;
pub mod error;
pub mod mapping;
pub mod mappings;
pub mod nuget_framework;
pub mod parser;
pub mod provider;
pub mod providers;
pub mod version;

pub use comparer::{
    FrameworkComparer, FrameworkFullComparer, FrameworkKey, FrameworkNameComparer,
    FrameworkProfileComparer,
};
pub use error::FrameworkError;
pub use nuget_framework::NuGetFramework;
pub use provider::FrameworkNameProvider;
pub use version::Version4;
