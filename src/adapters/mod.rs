// Adapters layer: concrete implementations for external systems (storage,
// photo lookup, hosted AI).

pub mod http;
pub mod photos;
pub mod store;
