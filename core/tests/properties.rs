use docmatch_core::matcher::{count_word, find_best_word_match, find_most_similar, overlap_score, SimilarityMatch, WordMatch};
use docmatch_core::tokenizer::tokenize;
use docmatch_core::{Corpus, TokenCounts};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ ,.!?éñ]{0,64}"
}

proptest! {
    #[test]
    fn tokenization_is_idempotent(s in text()) {
        let toks = tokenize(&s);
        prop_assert_eq!(tokenize(&toks.join(" ")), toks);
    }

    #[test]
    fn counts_sum_to_token_total(s in text()) {
        let counts = TokenCounts::from_text(Some(&s));
        prop_assert_eq!(counts.total(), tokenize(&s).len() as u64);
    }

    #[test]
    fn word_match_is_global_maximum(bodies in prop::collection::vec(text(), 0..6), word in "[a-c]{1,2}") {
        let corpus = Corpus::from_bodies(bodies.clone());
        let counts: Vec<u32> = bodies.iter().map(|b| count_word(Some(b), &word)).collect();
        let max = counts.iter().copied().max().unwrap_or(0);
        match find_best_word_match(&corpus, &word) {
            WordMatch::Found { position, frequency } => {
                prop_assert_eq!(frequency, max);
                prop_assert_eq!(Some(position), counts.iter().position(|&c| c == max));
            }
            WordMatch::NotFound => prop_assert_eq!(max, 0),
        }
    }

    #[test]
    fn repeated_query_token_doubles_contribution(s in text(), tok in "[a-c]{1,2}") {
        let counts = TokenCounts::from_text(Some(&s));
        prop_assert_eq!(overlap_score(&counts, &[tok.as_str(), tok.as_str()]), 2 * overlap_score(&counts, &[tok.as_str()]));
    }

    #[test]
    fn similarity_is_bounded(bodies in prop::collection::vec(text(), 1..5), q in text()) {
        match find_most_similar(bodies.iter().map(|b| Some(b.as_str())), &q) {
            SimilarityMatch::Found { similarity, .. } => prop_assert!((0.0..=1.0).contains(&similarity)),
            SimilarityMatch::NoDocuments => prop_assert!(false, "corpus is not empty"),
        }
    }
}
