//! HTTPS transport to the hosting service
//!
//! - `endpoints` - region-derived control-plane and runtime base URLs
//! - `credentials` - bearer credential sources
//! - `http` - reqwest-backed [`BedrockTransport`](crate::model::BedrockTransport)

mod credentials;
mod endpoints;
mod http;

pub use credentials::{EnvCredentialProvider, StaticCredentialProvider};
pub use endpoints::ServiceEndpoints;
pub use http::HttpTransport;
