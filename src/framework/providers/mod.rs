//! Name provider implementations

mod mapping_provider;

use std::sync::LazyLock;

use crate::framework::mappings::DefaultFrameworkMappings;

pub use mapping_provider::MappingNameProvider;

static DEFAULT_PROVIDER: LazyLock<MappingNameProvider> = LazyLock::new(|| {
    MappingNameProvider::new(&DefaultFrameworkMappings, &DefaultFrameworkMappings)
});

/// Process-wide provider over the built-in tables, indexed on first use
pub fn default_name_provider() -> &'static MappingNameProvider {
    &DEFAULT_PROVIDER
}
