pub mod cache_component;
pub mod cache_writer;
pub mod serialization_pair;

pub use cache_component::CacheComponent;
pub use cache_writer::CacheWriter;
pub use serialization_pair::SerializationPair;
