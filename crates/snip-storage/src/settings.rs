use typed_builder::TypedBuilder;

/// Draws allowed per new mapping unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// Configures an [`InMemoryMappingStore`](crate::InMemoryMappingStore).
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct StoreSettings {
    /// How many candidate codes a single `create_mapping` may draw before
    /// giving up. Values below 1 are treated as 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Number of mappings to pre-allocate room for.
    #[builder(default = 0)]
    pub capacity: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
