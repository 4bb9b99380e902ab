//! Hashed TF-IDF provider.
//!
//! Terms are hashed into a fixed number of buckets and weighted by term
//! frequency times a length-based IDF approximation. Needs no model files.

use std::collections::BTreeMap;

use recall_core::errors::RecallResult;
use recall_core::traits::IEmbeddingProvider;

/// Hashed TF-IDF embedding provider.
///
/// Deterministic and always available. Identical texts embed to identical
/// unit vectors; texts sharing no terms are orthogonal unless their terms
/// collide in a bucket.
pub struct TfIdfProvider {
    dimensions: usize,
}

impl TfIdfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a bucket for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let h = term.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        });
        (h % dims as u64) as usize
    }

    /// Lowercase alphanumeric terms of two or more characters.
    fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for term in Self::terms(text) {
            *counts.entry(term).or_default() += 1;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        if counts.is_empty() || self.dimensions == 0 {
            return vec;
        }

        let total: u32 = counts.values().sum();
        for (term, count) in &counts {
            let tf = *count as f32 / total as f32;
            // Short terms are mostly stopwords.
            let idf = 1.0 + (term.chars().count() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += tf * idf;
        }

        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vec.iter_mut().for_each(|v| *v /= norm);
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfProvider {
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = TfIdfProvider::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn single_char_terms_are_ignored() {
        let p = TfIdfProvider::new(64);
        assert!(p.embed("a b c ?").unwrap().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_normalized() {
        let p = TfIdfProvider::new(256);
        let v = p.embed("What cloud platforms have you worked with?").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn case_and_punctuation_insensitive() {
        let p = TfIdfProvider::new(256);
        let a = p.embed("What is your name?").unwrap();
        let b = p.embed("what IS your name").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_matches_individual() {
        let p = TfIdfProvider::new(128);
        let texts = vec!["docker and kubernetes".to_string(), "your education".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }

    #[test]
    fn overlapping_questions_score_higher() {
        let p = TfIdfProvider::new(384);
        let q = p.embed("what are your devops skills").unwrap();
        let near = p.embed("tell me about your devops skills").unwrap();
        let far = p.embed("where did you study").unwrap();
        assert!(dot(&q, &near) > dot(&q, &far));
    }
}
