//! Document matchers. Each returns a corpus position; dereferencing it is
//! the caller's job.

pub mod exact;
pub mod overlap;
pub mod similarity;

pub use exact::{count_word, find_best_word_match, WordMatch};
pub use overlap::{find_best_overlap, overlap_score, OverlapMatch};
pub use similarity::{cosine_similarity, find_most_similar, find_most_similar_with, round_score, SimilarityMatch, SparseVector, VectorizerOptions, Vocabulary};

use crate::document::Position;

/// Position and value of the maximum score. Ties go to the lowest position.
pub(crate) fn first_max<T, I>(scores: I) -> Option<(Position, T)>
where
    T: PartialOrd + Copy,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(Position, T)> = None;
    for (pos, score) in scores.into_iter().enumerate() {
        let better = match best {
            Some((_, b)) => score > b,
            None => true,
        };
        if better {
            best = Some((pos, score));
        }
    }
    best
}
