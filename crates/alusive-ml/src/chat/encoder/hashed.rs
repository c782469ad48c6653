use std::collections::HashMap;

use super::{EncoderError, SentenceEncoder};

/// Term-hashing encoder with no model files.
///
/// Terms are hashed into fixed buckets and weighted by frequency and length, then the vector
/// is L2-normalised. Identical wording scores 1.0; paraphrases score lower than with a neural
/// model.
#[derive(Debug, Clone)]
pub struct HashedTfidfEncoder {
    dimensions: usize,
}

impl HashedTfidfEncoder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a.
    fn bucket(&self, term: &str) -> usize {
        let mut hash: u64 = 0xcbf29ce484222325;
        for byte in term.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x100000001b3);
        }
        (hash % self.dimensions as u64) as usize
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| token.chars().count() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vector;
        }

        let mut frequencies: HashMap<&str, f32> = HashMap::new();
        for token in &tokens {
            *frequencies.entry(token.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        for (term, count) in frequencies {
            // Longer terms carry more signal than short function words.
            let weight = 1.0 + (term.chars().count() as f32).ln();
            vector[self.bucket(term)] += (count / total) * weight;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

impl SentenceEncoder for HashedTfidfEncoder {
    fn name(&self) -> &str {
        "hashed-tfidf"
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncoderError> {
        Ok(texts.iter().map(|text| self.embed(text)).collect())
    }
}
