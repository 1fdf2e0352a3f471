//! Text embeddings for the gateway.
//!
//! - [`EmbeddingProvider`]: backend trait (one batch in, one vector per text out)
//! - [`OpenAiService`]: `POST /v1/embeddings` implementation
//! - [`EmbeddingAdapter`]: shared handle used by request handlers

mod adapter;
pub mod config;
pub mod error_handler;
mod provider;
pub mod services;

pub use adapter::EmbeddingAdapter;
pub use config::embedding_config::{EMBEDDING_MODEL, EmbeddingConfig};
pub use error_handler::{ConfigError, EmbeddingError};
pub use provider::EmbeddingProvider;
pub use services::open_ai_service::OpenAiService;
