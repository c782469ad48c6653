use serde::{Deserialize, Serialize};
use tracing::debug;

use super::encoder::{EncoderError, SentenceEncoder};
use super::faq::FaqEntry;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.6;

pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't find a good match for your question. Try rephrasing it or contact us at alusiveafrica.rwa@alustudent.com for help.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    pub confidence: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("FAQ catalog is empty")]
    EmptyCatalog,
    #[error("encoder returned {actual} embeddings for {expected} FAQ questions")]
    EmbeddingCountMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Encoder(#[from] EncoderError),
}

/// Closest FAQ for a question together with its cosine score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaqMatch<'a> {
    pub entry: &'a FaqEntry,
    pub score: f32,
}

/// Answers free-text questions with the semantically closest FAQ.
pub struct FaqMatcher<E> {
    encoder: E,
    faqs: Vec<FaqEntry>,
    embeddings: Vec<Vec<f32>>,
    threshold: f32,
}

impl<E> FaqMatcher<E>
where
    E: SentenceEncoder,
{
    /// Embeds every FAQ question once up front.
    pub fn new(encoder: E, faqs: Vec<FaqEntry>, threshold: f32) -> Result<Self, ChatError> {
        if faqs.is_empty() {
            return Err(ChatError::EmptyCatalog);
        }

        let questions: Vec<&str> = faqs.iter().map(|faq| faq.question.as_str()).collect();
        let embeddings = encoder.encode_batch(&questions)?;
        if embeddings.len() != faqs.len() {
            return Err(ChatError::EmbeddingCountMismatch {
                expected: faqs.len(),
                actual: embeddings.len(),
            });
        }

        debug!(
            encoder = encoder.name(),
            faqs = faqs.len(),
            "embedded FAQ catalog"
        );
        Ok(Self {
            encoder,
            faqs,
            embeddings,
            threshold,
        })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn best_match(&self, question: &str) -> Result<FaqMatch<'_>, ChatError> {
        let query = self.encoder.encode(question)?;

        let mut best_index = 0;
        let mut best_score = f32::NEG_INFINITY;
        for (index, embedding) in self.embeddings.iter().enumerate() {
            let score = cosine_similarity(&query, embedding);
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }

        Ok(FaqMatch {
            entry: &self.faqs[best_index],
            score: best_score,
        })
    }

    /// Returns the best FAQ answer when its score clears the threshold, otherwise the fallback.
    pub fn answer(&self, question: &str) -> Result<ChatAnswer, ChatError> {
        let best = self.best_match(question)?;
        let answer = if best.score > self.threshold {
            best.entry.answer.clone()
        } else {
            FALLBACK_ANSWER.to_string()
        };

        debug!(
            matched = %best.entry.question,
            score = best.score,
            answered = best.score > self.threshold,
            "matched chat question"
        );
        Ok(ChatAnswer {
            answer,
            confidence: best.score,
        })
    }
}

/// Cosine similarity; 0.0 when either vector has zero norm or the widths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
