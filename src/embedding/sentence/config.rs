use std::path::PathBuf;

use crate::config::{
    ConfigError, parse_bool_from_env, parse_optional_path_from_env, parse_usize_from_env,
};
use crate::embedding::error::EmbeddingError;

/// Default sentence embedding dimension (all-MiniLM-L6-v2).
pub const SENTENCE_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default sentence encoder max sequence length.
pub const SENTENCE_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
pub struct SentenceConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_path: Option<PathBuf>,
    /// Max tokens to consider; longer input is truncated.
    pub max_seq_len: usize,
    /// Stub embedding dimension (a loaded model reports its own hidden size).
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            max_seq_len: SENTENCE_MAX_SEQ_LEN,
            embedding_dim: SENTENCE_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl SentenceConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_PATH: &'static str = "TWIST_MODEL_PATH";
    /// Env var toggling stub mode.
    pub const ENV_STUB: &'static str = "TWIST_EMBEDDER_STUB";
    /// Env var overriding the max sequence length.
    pub const ENV_MAX_SEQ_LEN: &'static str = "TWIST_MAX_SEQ_LEN";

    /// Loads config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            model_path: parse_optional_path_from_env(Self::ENV_MODEL_PATH),
            max_seq_len: parse_usize_from_env(Self::ENV_MAX_SEQ_LEN, defaults.max_seq_len)?,
            testing_stub: parse_bool_from_env(Self::ENV_STUB, defaults.testing_stub)?,
            ..defaults
        })
    }

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            if self.embedding_dim == 0 {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "embedding_dim must be greater than zero".to_string(),
                });
            }
            return Ok(());
        }

        let Some(model_path) = &self.model_path else {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_path is required (stubbing is disabled)".to_string(),
            });
        };

        if !model_path.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: model_path.clone(),
            });
        }

        for required in ["config.json", "model.safetensors", "tokenizer.json"] {
            let path = model_path.join(required);
            if !path.is_file() {
                return Err(EmbeddingError::ModelNotFound { path });
            }
        }

        Ok(())
    }
}
