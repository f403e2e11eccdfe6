//! Sentence embedder (BERT + mean pooling), the default [`SemanticSimilarity`] collaborator.
//!
//! Use [`SentenceConfig::stub`] for tests/examples without model files. When no model could be
//! loaded, [`SentenceEmbedder::unavailable`] keeps the process up while every similarity query
//! fails with [`EmbeddingError::ModelUnavailable`].

/// Sentence embedder configuration.
pub mod config;


pub use config::{SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, SentenceConfig};

use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use crate::embedding::bert::BertSentenceEncoder;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::similarity::{SemanticSimilarity, cosine_similarity};
use crate::embedding::utils::load_tokenizer;
use crate::scoring::tokenize::word_tokens;

enum EmbedderBackend {
    Model {
        encoder: BertSentenceEncoder,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub,
    Unavailable {
        reason: String,
    },
}

/// How the embedder produces vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedderMode {
    Model,
    Stub,
    Unavailable,
}

impl EmbedderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedderMode::Model => "model",
            EmbedderMode::Stub => "stub",
            EmbedderMode::Unavailable => "unavailable",
        }
    }
}

/// Embedding generator for semantic scoring (supports stub mode).
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: SentenceConfig,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub => "Stub".to_string(),
                    EmbedderBackend::Unavailable { reason } => format!("Unavailable({reason})"),
                },
            )
            .field("embedding_dim", &self.embedding_dim())
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: SentenceConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence embedder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
            });
        }

        let model_path = config
            .model_path
            .clone()
            .ok_or_else(|| EmbeddingError::InvalidConfig {
                reason: "model_path is required (stubbing is disabled)".to_string(),
            })?;

        let device = select_device();
        debug!(?device, "Selected compute device for sentence encoder");

        let encoder = BertSentenceEncoder::load(&model_path, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT encoder: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer(&model_path, config.max_seq_len).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        info!(
            model_path = %model_path.display(),
            hidden_size = encoder.hidden_size(),
            max_seq_len = config.max_seq_len,
            "Sentence encoder loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Like [`load`](Self::load), but a missing or broken model yields an
    /// [`unavailable`](Self::unavailable) embedder instead of an error.
    pub fn load_or_unavailable(config: SentenceConfig) -> Self {
        if config.model_path.is_none() && !config.testing_stub {
            return Self::unavailable(format!(
                "no {} configured and stub mode disabled",
                SentenceConfig::ENV_MODEL_PATH
            ));
        }

        match Self::load(config) {
            Ok(embedder) => embedder,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load sentence embedder");
                Self::unavailable(e.to_string())
            }
        }
    }

    /// Stub embedder with default config.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(SentenceConfig::stub())
    }

    /// Embedder that rejects every query; used when no model could be loaded.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!(reason = %reason, "Sentence embedder unavailable; semantic scoring will fail");
        Self {
            backend: EmbedderBackend::Unavailable { reason },
            config: SentenceConfig::default(),
        }
    }

    /// Generates a unit-length embedding for a single string.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_with_model(text, encoder, tokenizer, device),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
            EmbedderBackend::Unavailable { reason } => Err(EmbeddingError::ModelUnavailable {
                reason: reason.clone(),
            }),
        }
    }

    fn embed_with_model(
        &self,
        text: &str,
        encoder: &BertSentenceEncoder,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Generating embedding (BERT forward pass)"
        );

        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let pooled = encoder
            .encode(&input_ids, &type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Encoder forward pass failed: {}", e),
            })?
            .squeeze(0)?
            .to_vec1::<f32>()?;

        Ok(normalize(pooled))
    }

    /// Feature-hashed bag of words. Identical texts embed identically and shared words pull
    /// vectors together, which is enough for wiring tests but carries no real semantics.
    fn embed_stub(&self, text: &str) -> Vec<f32> {
        let dim = self.config.embedding_dim;
        let mut embedding = vec![0.0f32; dim];

        for token in word_tokens(text) {
            let hash = blake3::hash(token.as_bytes());
            let bytes = hash.as_bytes();
            let mut index_bytes = [0u8; 8];
            index_bytes.copy_from_slice(&bytes[..8]);
            let index = (u64::from_le_bytes(index_bytes) % dim as u64) as usize;
            let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
            embedding[index] += sign;
        }

        normalize(embedding)
    }

    /// Output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        match &self.backend {
            EmbedderBackend::Model { encoder, .. } => encoder.hidden_size(),
            EmbedderBackend::Stub | EmbedderBackend::Unavailable { .. } => {
                self.config.embedding_dim
            }
        }
    }

    pub fn mode(&self) -> EmbedderMode {
        match self.backend {
            EmbedderBackend::Model { .. } => EmbedderMode::Model,
            EmbedderBackend::Stub => EmbedderMode::Stub,
            EmbedderBackend::Unavailable { .. } => EmbedderMode::Unavailable,
        }
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        self.mode() == EmbedderMode::Stub
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        self.mode() == EmbedderMode::Model
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &SentenceConfig {
        &self.config
    }
}

impl SemanticSimilarity for SentenceEmbedder {
    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32, EmbeddingError> {
        let a = self.embed(text_a)?;
        let b = self.embed(text_b)?;
        cosine_similarity(&a, &b)
    }
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}
