//! Model infrastructure module
//!
//! # Structure
//! - `types` - error taxonomy and raw transport responses
//! - `traits` - transport, credential, prompt-formatter and codec seams
//! - `prompt` - provider turn-delimiter formatters
//! - `codecs` - per-provider request/response codecs
//! - `registry` - provider key → codec table
//! - `catalog` - foundation-model listing
//! - `invoker` - single-shot model invocation

pub mod catalog;
pub mod codecs;
pub mod invoker;
pub mod prompt;
pub mod registry;
pub mod traits;
pub mod types;

pub use catalog::ModelCatalogClient;
pub use invoker::ModelInvoker;
pub use registry::{CodecRegistry, provider_key};
pub use traits::{BedrockTransport, CredentialProvider, PromptFormatter, ProviderCodec};
pub use types::{ModelError, ModelErrorKind, RawResponse};
