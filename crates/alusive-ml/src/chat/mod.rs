//! FAQ chat: sentence embeddings, cosine matching against the published catalog.

pub mod encoder;
pub mod faq;
pub mod matcher;
pub mod router;

#[cfg(test)]
mod tests;

pub use encoder::{load_encoder, EncoderError, HashedTfidfEncoder, SentenceEncoder};
#[cfg(feature = "onnx")]
pub use encoder::OnnxSentenceEncoder;
pub use faq::{default_catalog, FaqEntry, FaqTopic};
pub use matcher::{
    cosine_similarity, ChatAnswer, ChatError, ChatRequest, FaqMatch, FaqMatcher,
    DEFAULT_CONFIDENCE_THRESHOLD, FALLBACK_ANSWER,
};
pub use router::chat_router;
