use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::chat::encoder::{EncoderError, SentenceEncoder};
use crate::chat::faq::{FaqEntry, FaqTopic};

const KEYWORDS: [&str; 4] = ["grant", "internship", "venture", "contact"];

/// Encodes a text as keyword counts so similarities are predictable in tests.
#[derive(Clone, Default)]
pub(super) struct KeywordEncoder {
    pub(super) calls: Arc<AtomicUsize>,
}

impl KeywordEncoder {
    pub(super) fn embed(text: &str) -> Vec<f32> {
        let lowered = text.to_lowercase();
        KEYWORDS
            .iter()
            .map(|keyword| lowered.matches(keyword).count() as f32)
            .collect()
    }
}

impl SentenceEncoder for KeywordEncoder {
    fn name(&self) -> &str {
        "keyword"
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncoderError> {
        self.calls.fetch_add(texts.len(), Ordering::SeqCst);
        Ok(texts.iter().map(|text| Self::embed(text)).collect())
    }
}

/// Returns one embedding fewer than requested.
pub(super) struct ShortEncoder;

impl SentenceEncoder for ShortEncoder {
    fn name(&self) -> &str {
        "short"
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncoderError> {
        Ok(texts.iter().skip(1).map(|_| vec![1.0]).collect())
    }
}

pub(super) struct FailingEncoder;

impl SentenceEncoder for FailingEncoder {
    fn name(&self) -> &str {
        "failing"
    }

    fn encode_batch(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EncoderError> {
        Err(EncoderError::Inference("session unavailable".to_string()))
    }
}

pub(super) fn faq(topic: FaqTopic, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        topic,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub(super) fn sample_catalog() -> Vec<FaqEntry> {
    vec![
        faq(
            FaqTopic::Grants,
            "Who can apply for a grant?",
            "Any enrolled student may apply for a grant.",
        ),
        faq(
            FaqTopic::Internships,
            "Are internship placements paid?",
            "Yes, internship placements include a stipend.",
        ),
        faq(
            FaqTopic::VentureSupport,
            "What venture support do you offer?",
            "Mentorship and seed funding for student ventures.",
        ),
        faq(
            FaqTopic::General,
            "How do I contact the team?",
            "Email the team to contact us.",
        ),
    ]
}
