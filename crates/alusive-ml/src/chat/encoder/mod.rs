//! Sentence-embedding seam used by the FAQ matcher.

mod hashed;
#[cfg(feature = "onnx")]
mod onnx;

use std::path::Path;

pub use hashed::HashedTfidfEncoder;
#[cfg(feature = "onnx")]
pub use onnx::OnnxSentenceEncoder;

/// Produces fixed-width embeddings for short texts.
pub trait SentenceEncoder: Send + Sync {
    fn name(&self) -> &str;

    /// Embed each text, returning one vector per input in order.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncoderError>;

    fn encode(&self, text: &str) -> Result<Vec<f32>, EncoderError> {
        self.encode_batch(&[text])?
            .into_iter()
            .next()
            .ok_or(EncoderError::EmptyOutput)
    }
}

impl SentenceEncoder for Box<dyn SentenceEncoder> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncoderError> {
        (**self).encode_batch(texts)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncoderError {
    #[error("embedding model file not found: {0}")]
    ModelNotFound(String),
    #[error("failed to load embedding model: {0}")]
    Load(String),
    #[error("tokenization failed: {0}")]
    Tokenize(String),
    #[error("embedding inference failed: {0}")]
    Inference(String),
    #[error("encoder returned no embeddings")]
    EmptyOutput,
}

/// Dimensionality of all-MiniLM-L6-v2, reused for the hashed fallback.
pub const DEFAULT_DIMENSIONS: usize = 384;

/// Load the sentence-transformer model from `model_dir` when ONNX support is compiled in.
///
/// A missing model directory degrades to the hashed encoder; a model that exists but fails to
/// load is an error.
#[cfg(feature = "onnx")]
pub fn load_encoder(model_dir: &Path) -> Result<Box<dyn SentenceEncoder>, EncoderError> {
    match OnnxSentenceEncoder::load(model_dir) {
        Ok(encoder) => Ok(Box::new(encoder)),
        Err(EncoderError::ModelNotFound(path)) => {
            tracing::warn!(
                missing = %path,
                "embedding model not found; using hashed TF-IDF embeddings"
            );
            Ok(Box::new(HashedTfidfEncoder::new(DEFAULT_DIMENSIONS)))
        }
        Err(other) => Err(other),
    }
}

/// Without ONNX support the hashed term encoder stands in for the neural model.
#[cfg(not(feature = "onnx"))]
pub fn load_encoder(model_dir: &Path) -> Result<Box<dyn SentenceEncoder>, EncoderError> {
    tracing::warn!(
        model_dir = %model_dir.display(),
        "built without the `onnx` feature; using hashed TF-IDF embeddings"
    );
    Ok(Box::new(HashedTfidfEncoder::new(DEFAULT_DIMENSIONS)))
}
