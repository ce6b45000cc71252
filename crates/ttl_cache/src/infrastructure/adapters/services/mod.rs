pub mod in_mem_cache_writer;

pub use in_mem_cache_writer::InMemCacheWriter;
