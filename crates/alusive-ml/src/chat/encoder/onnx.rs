//! ONNX Runtime encoder for sentence-transformers models (all-MiniLM-L6-v2).
//!
//! The model directory must contain `model.onnx` and `tokenizer.json`. Token embeddings are
//! mean-pooled under the attention mask and L2-normalised.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::info;

use super::{EncoderError, SentenceEncoder};

const MAX_SEQUENCE_LENGTH: usize = 256;

pub struct OnnxSentenceEncoder {
    /// `Session::run` takes `&mut self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    name: String,
}

impl OnnxSentenceEncoder {
    pub fn load(model_dir: &Path) -> Result<Self, EncoderError> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            return Err(EncoderError::ModelNotFound(model_path.display().to_string()));
        }
        if !tokenizer_path.exists() {
            return Err(EncoderError::ModelNotFound(
                tokenizer_path.display().to_string(),
            ));
        }

        let session = Session::builder()
            .and_then(|builder| builder.commit_from_file(&model_path))
            .map_err(|e| EncoderError::Load(e.to_string()))?;

        let mut tokenizer =
            Tokenizer::from_file(&tokenizer_path).map_err(|e| EncoderError::Load(e.to_string()))?;
        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: MAX_SEQUENCE_LENGTH,
                ..Default::default()
            }))
            .map_err(|e| EncoderError::Load(e.to_string()))?;
        tokenizer.with_padding(Some(tokenizers::PaddingParams::default()));

        let name = model_dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("onnx-encoder")
            .to_string();

        info!(model = %model_path.display(), "loaded sentence embedding model");
        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            name,
        })
    }
}

impl SentenceEncoder for OnnxSentenceEncoder {
    fn name(&self) -> &str {
        &self.name
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EncoderError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let batch_size = texts.len();
        let encodings = self
            .tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| EncoderError::Tokenize(e.to_string()))?;

        let seq_len = encodings
            .iter()
            .map(|encoding| encoding.get_ids().len())
            .max()
            .unwrap_or(0);

        let mut input_ids = vec![0i64; batch_size * seq_len];
        let mut attention_mask = vec![0i64; batch_size * seq_len];
        let mut token_type_ids = vec![0i64; batch_size * seq_len];

        for (row, encoding) in encodings.iter().enumerate() {
            let offset = row * seq_len;
            for (col, &id) in encoding.get_ids().iter().enumerate() {
                input_ids[offset + col] = i64::from(id);
            }
            for (col, &mask) in encoding.get_attention_mask().iter().enumerate() {
                attention_mask[offset + col] = i64::from(mask);
            }
            for (col, &type_id) in encoding.get_type_ids().iter().enumerate() {
                token_type_ids[offset + col] = i64::from(type_id);
            }
        }

        let shape = [batch_size as i64, seq_len as i64];
        let inference = |e: ort::Error| EncoderError::Inference(e.to_string());

        let ids_tensor =
            Tensor::from_array((shape, input_ids.into_boxed_slice())).map_err(inference)?;
        let mask_tensor = Tensor::from_array((shape, attention_mask.clone().into_boxed_slice()))
            .map_err(inference)?;
        let type_tensor =
            Tensor::from_array((shape, token_type_ids.into_boxed_slice())).map_err(inference)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| EncoderError::Inference("session lock poisoned".to_string()))?;
        let outputs = session
            .run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor,
            ])
            .map_err(inference)?;

        // [batch, seq, dim]
        let (output_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(inference)?;
        let dims: &[i64] = output_shape;
        if dims.len() != 3 || dims[0] as usize != batch_size {
            return Err(EncoderError::Inference(format!(
                "unexpected output shape {dims:?} for batch of {batch_size}"
            )));
        }
        let output_seq = dims[1] as usize;
        let dim = dims[2] as usize;

        let mut embeddings = Vec::with_capacity(batch_size);
        for row in 0..batch_size {
            let mut pooled = vec![0.0f32; dim];
            let mut tokens = 0.0f32;

            for col in 0..output_seq.min(seq_len) {
                let mask = attention_mask[row * seq_len + col] as f32;
                if mask > 0.0 {
                    let offset = (row * output_seq + col) * dim;
                    for (d, value) in pooled.iter_mut().enumerate() {
                        *value += data[offset + d] * mask;
                    }
                    tokens += mask;
                }
            }

            if tokens > 0.0 {
                for value in &mut pooled {
                    *value /= tokens;
                }
            }
            normalize(&mut pooled);
            embeddings.push(pooled);
        }

        Ok(embeddings)
    }
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}
