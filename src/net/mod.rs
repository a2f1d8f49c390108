//! Backend wire types and the HTTP client.

pub mod api;
pub mod types;

pub use api::ApiClient;
