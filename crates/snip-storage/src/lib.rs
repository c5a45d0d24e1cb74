pub mod memory;
pub mod settings;

pub use memory::InMemoryMappingStore;
pub use settings::StoreSettings;
pub use snip_core::{Mapping, MappingStore, StoreError};
