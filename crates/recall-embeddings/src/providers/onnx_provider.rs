//! ONNX Runtime embedding provider.
//!
//! Loads a sentence-encoder exported to ONNX via the `ort` crate (v2) together
//! with the model's own `tokenizer.json`, and uses the `[CLS]` token of the
//! last hidden state as the sentence vector. Inputs are passed by name:
//! `input_ids`, `attention_mask` and, when configured, `token_type_ids`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use recall_core::config::defaults::DEFAULT_MAX_SEQUENCE_LEN;
use recall_core::config::EmbeddingConfig;
use recall_core::errors::{EmbeddingError, RecallResult};
use recall_core::traits::IEmbeddingProvider;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::debug;

/// Tokenizer file looked up next to the model when none is configured.
const TOKENIZER_FILE: &str = "tokenizer.json";

/// ONNX-based embedding provider.
pub struct OnnxProvider {
    /// `Session::run` needs `&mut`, the trait only gives `&self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    token_type_ids: bool,
    dimensions: usize,
    model_name: String,
}

/// One tokenized query, widened to the encoder's `i64` inputs.
#[derive(Debug, PartialEq)]
struct EncodedText {
    ids: Vec<i64>,
    attention_mask: Vec<i64>,
    type_ids: Vec<i64>,
}

impl OnnxProvider {
    /// Load the model and tokenizer named by `config`.
    ///
    /// # Errors
    /// Returns `EmbeddingError::ModelLoadFailed` if the model path is unset,
    /// either file is missing or unreadable, or the session cannot be built.
    pub fn load(config: &EmbeddingConfig) -> RecallResult<Self> {
        let model_path = config
            .model_path
            .as_deref()
            .ok_or_else(|| EmbeddingError::ModelLoadFailed {
                path: String::new(),
                reason: "embedding.model_path is not set".to_string(),
            })?;
        let load_failed = |path: &Path, reason: String| EmbeddingError::ModelLoadFailed {
            path: path.display().to_string(),
            reason,
        };

        let path = Path::new(model_path);
        if !path.is_file() {
            return Err(load_failed(path, "model file not found".to_string()).into());
        }

        let tokenizer_path = tokenizer_path(config, path);
        let tokenizer = load_tokenizer(&tokenizer_path)
            .map_err(|reason| load_failed(&tokenizer_path, reason))?;

        let session = Session::builder()
            .map_err(|e| load_failed(path, e.to_string()))?
            .with_intra_threads(config.intra_threads)
            .map_err(|e| load_failed(path, e.to_string()))?
            .commit_from_file(path)
            .map_err(|e| load_failed(path, e.to_string()))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(
            model = %model_name,
            tokenizer = %tokenizer_path.display(),
            dims = config.dimensions,
            "ONNX model loaded"
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            token_type_ids: config.token_type_ids,
            dimensions: config.dimensions,
            model_name,
        })
    }

    fn infer(&self, text: &str) -> RecallResult<Vec<f32>> {
        let inference_failed = |reason: String| EmbeddingError::InferenceFailed { reason };

        let encoded = encode(&self.tokenizer, text).map_err(inference_failed)?;
        let shape = vec![1i64, encoded.ids.len() as i64];

        let ids = Tensor::from_array((shape.clone(), encoded.ids))
            .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;
        let mask = Tensor::from_array((shape.clone(), encoded.attention_mask))
            .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| inference_failed(format!("session lock poisoned: {e}")))?;

        let outputs = if self.token_type_ids {
            let types = Tensor::from_array((shape, encoded.type_ids))
                .map_err(|e| inference_failed(format!("tensor creation error: {e}")))?;
            session.run(ort::inputs![
                "input_ids" => ids,
                "attention_mask" => mask,
                "token_type_ids" => types
            ])
        } else {
            session.run(ort::inputs![
                "input_ids" => ids,
                "attention_mask" => mask
            ])
        }
        .map_err(|e| inference_failed(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| inference_failed("no output tensor".to_string()))?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| inference_failed(format!("tensor extraction failed: {e}")))?;

        let mut embedding = cls_pool(shape, data).map_err(inference_failed)?;
        l2_normalize(&mut embedding);

        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        Ok(embedding)
    }
}

/// Explicit `tokenizer_path`, else `tokenizer.json` beside the model.
fn tokenizer_path(config: &EmbeddingConfig, model_path: &Path) -> PathBuf {
    config
        .tokenizer_path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| model_path.with_file_name(TOKENIZER_FILE))
}

/// Load a Hugging Face `tokenizer.json` and cap its output at the encoder
/// limit.
fn load_tokenizer(path: &Path) -> Result<Tokenizer, String> {
    if !path.is_file() {
        return Err("tokenizer file not found".to_string());
    }
    let mut tokenizer = Tokenizer::from_file(path).map_err(|e| e.to_string())?;
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: DEFAULT_MAX_SEQUENCE_LEN,
            ..Default::default()
        }))
        .map_err(|e| e.to_string())?;
    Ok(tokenizer)
}

fn encode(tokenizer: &Tokenizer, text: &str) -> Result<EncodedText, String> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| format!("tokenization failed: {e}"))?;
    let widen = |v: &[u32]| v.iter().copied().map(i64::from).collect::<Vec<_>>();
    Ok(EncodedText {
        ids: widen(encoding.get_ids()),
        attention_mask: widen(encoding.get_attention_mask()),
        type_ids: widen(encoding.get_type_ids()),
    })
}

/// Sentence vector from the encoder output.
///
/// `[batch, seq, dims]` yields the first token of the first sequence;
/// `[batch, dims]` is already pooled.
fn cls_pool(shape: &[i64], data: &[f32]) -> Result<Vec<f32>, String> {
    let dims = match shape {
        [batch, seq, dims] if *batch > 0 && *seq > 0 => *dims,
        [batch, dims] if *batch > 0 => *dims,
        _ => return Err(format!("unexpected output shape: {shape:?}")),
    };
    let dims = usize::try_from(dims)
        .ok()
        .filter(|&d| d > 0)
        .ok_or_else(|| format!("invalid hidden size in shape {shape:?}"))?;
    data.get(..dims)
        .map(<[f32]>::to_vec)
        .ok_or_else(|| "output tensor shorter than its shape".to_string())
}

fn l2_normalize(v: &mut [f32]) {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        v.iter_mut().for_each(|x| *x /= norm);
    }
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>> {
        self.infer(text)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
