//! Mapping table implementations

mod default;
mod file;

pub use default::DefaultFrameworkMappings;
pub use file::FileFrameworkMappings;
