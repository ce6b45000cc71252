pub mod adapters;
pub mod components;
pub mod di;
