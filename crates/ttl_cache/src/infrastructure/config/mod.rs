pub mod settings;
pub mod ttl_table;

pub use settings::CacheSettings;
pub use ttl_table::TtlTable;
