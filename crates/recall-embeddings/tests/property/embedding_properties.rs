use proptest::prelude::*;
use recall_core::traits::IEmbeddingProvider;
use recall_embeddings::providers::TfIdfProvider;

proptest! {
    #[test]
    fn dimension_is_fixed(s in ".{0,200}", dims in 1usize..512) {
        let p = TfIdfProvider::new(dims);
        prop_assert_eq!(p.embed(&s).unwrap().len(), dims);
    }

    #[test]
    fn deterministic(s in ".{0,200}") {
        let p = TfIdfProvider::new(128);
        prop_assert_eq!(p.embed(&s).unwrap(), p.embed(&s).unwrap());
    }

    #[test]
    fn unit_norm_or_zero(s in ".{0,200}") {
        let p = TfIdfProvider::new(128);
        let v = p.embed(&s).unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4, "norm was {}", norm);
    }

    #[test]
    fn components_are_non_negative(s in "[a-z ]{0,100}") {
        let p = TfIdfProvider::new(64);
        prop_assert!(p.embed(&s).unwrap().iter().all(|&x| x >= 0.0));
    }
}
