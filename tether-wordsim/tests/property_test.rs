//! Property tests for the string measures: symmetry, identity and score
//! range invariants across arbitrary lowercase terms.

use proptest::prelude::*;

use tether_wordsim::context::ComparisonContext;
use tether_wordsim::measures::{
    jaro_winkler, levenshtein, EqualityMeasure, JaroWinklerMeasure, LevenshteinMeasure,
    NgramMeasure, SimilarityMeasure,
};

fn arb_term() -> impl Strategy<Value = String> {
    "[a-z]{0,12}"
}

fn string_measures() -> Vec<SimilarityMeasure> {
    vec![
        SimilarityMeasure::Equality(EqualityMeasure),
        SimilarityMeasure::Levenshtein(LevenshteinMeasure::default()),
        SimilarityMeasure::JaroWinkler(JaroWinklerMeasure::default()),
        SimilarityMeasure::Ngram(NgramMeasure::default()),
    ]
}

proptest! {
    #[test]
    fn levenshtein_distance_is_symmetric(a in arb_term(), b in arb_term()) {
        prop_assert_eq!(levenshtein::distance(&a, &b), levenshtein::distance(&b, &a));
    }

    #[test]
    fn jaro_winkler_is_symmetric(a in arb_term(), b in arb_term()) {
        prop_assert_eq!(
            jaro_winkler::similarity(&a, &b),
            jaro_winkler::similarity(&b, &a)
        );
    }

    #[test]
    fn ngram_distance_is_symmetric(a in arb_term(), b in arb_term()) {
        let measure = NgramMeasure::default();
        prop_assert_eq!(measure.distance(&a, &b), measure.distance(&b, &a));
    }

    #[test]
    fn scores_stay_in_unit_interval(a in arb_term(), b in arb_term()) {
        let ctx = ComparisonContext::of(&a, &b);
        for measure in string_measures() {
            let score = measure.score(&ctx);
            prop_assert!(
                (0.0..=1.0).contains(&score),
                "{} scored {} for {:?}/{:?}",
                measure.name(),
                score,
                a,
                b
            );
        }
    }

    #[test]
    fn every_measure_matches_identical_terms(a in arb_term()) {
        let ctx = ComparisonContext::of(&a, &a);
        for measure in string_measures() {
            prop_assert!(measure.is_similar(&ctx), "{} rejected identity", measure.name());
            prop_assert_eq!(measure.score(&ctx), 1.0);
        }
    }

    #[test]
    fn boolean_verdicts_are_symmetric(a in arb_term(), b in arb_term()) {
        let forward = ComparisonContext::of(&a, &b);
        let backward = ComparisonContext::of(&b, &a);
        for measure in string_measures() {
            prop_assert_eq!(measure.is_similar(&forward), measure.is_similar(&backward));
        }
    }
}
