//! Ranking: a validated permutation of variant positions.
//!
//! The core never hands back opaque variant objects. It hands back positions
//! into the original variant list, so typed values can be restored by indexing
//! instead of searching.

use std::cmp::Ordering;

/// Errors produced when building a [`Ranking`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("cannot rank an empty set of variants")]
    Empty,

    #[error("score at position {position} is not finite: {score}")]
    NonFiniteScore { position: usize, score: f64 },

    #[error("position {position} is out of range for {len} variants")]
    OutOfRange { position: usize, len: usize },

    #[error("position {0} appears more than once")]
    Duplicate(usize),

    #[error("expected {expected} positions, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Positions `0..n` ordered best first.
///
/// # Invariant
/// `positions` is always a permutation of `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    positions: Vec<usize>,
}

impl Ranking {
    /// Orders positions by descending score.
    ///
    /// Ties keep the original order (lower position first).
    pub fn from_scores(scores: &[f64]) -> Result<Self, RankingError> {
        if scores.is_empty() {
            return Err(RankingError::Empty);
        }
        if let Some((position, &score)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(RankingError::NonFiniteScore { position, score });
        }

        let mut positions: Vec<usize> = (0..scores.len()).collect();
        // sort_by は stable なので同点は元の順序を保つ
        positions.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
        });
        Ok(Self { positions })
    }

    /// Validates an explicit ordering produced elsewhere.
    pub fn from_positions(positions: Vec<usize>, len: usize) -> Result<Self, RankingError> {
        if len == 0 {
            return Err(RankingError::Empty);
        }
        if positions.len() != len {
            return Err(RankingError::LengthMismatch {
                expected: len,
                actual: positions.len(),
            });
        }
        let mut seen = vec![false; len];
        for &position in &positions {
            if position >= len {
                return Err(RankingError::OutOfRange { position, len });
            }
            if seen[position] {
                return Err(RankingError::Duplicate(position));
            }
            seen[position] = true;
        }
        Ok(Self { positions })
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Position of the best variant.
    pub fn best(&self) -> usize {
        self.positions[0]
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; an empty ranking cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Reorders `items` according to this ranking.
    ///
    /// # Panics
    /// Panics if `items.len()` differs from the ranking length.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        assert_eq!(
            items.len(),
            self.positions.len(),
            "ranking covers {} positions but {} items were supplied",
            self.positions.len(),
            items.len()
        );
        self.positions.iter().map(|&i| items[i].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn from_scores_orders_descending() {
        let ranking = Ranking::from_scores(&[0.1, 0.9, 0.5]).unwrap();
        assert_eq!(ranking.positions(), &[1, 2, 0]);
        assert_eq!(ranking.best(), 1);
    }

    #[test]
    fn from_scores_keeps_original_order_on_ties() {
        let ranking = Ranking::from_scores(&[1.0, 2.0, 1.0, 2.0]).unwrap();
        assert_eq!(ranking.positions(), &[1, 3, 0, 2]);
    }

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::pos_inf(f64::INFINITY)]
    #[case::neg_inf(f64::NEG_INFINITY)]
    fn from_scores_rejects_non_finite(#[case] bad: f64) {
        let result = Ranking::from_scores(&[0.5, bad]);
        assert!(matches!(
            result,
            Err(RankingError::NonFiniteScore { position: 1, .. })
        ));
    }

    #[test]
    fn from_scores_rejects_empty() {
        assert_eq!(Ranking::from_scores(&[]), Err(RankingError::Empty));
    }

    #[rstest]
    #[case::out_of_range(vec![0, 3, 1], RankingError::OutOfRange { position: 3, len: 3 })]
    #[case::duplicate(vec![0, 0, 1], RankingError::Duplicate(0))]
    #[case::too_short(vec![0, 1], RankingError::LengthMismatch { expected: 3, actual: 2 })]
    fn from_positions_rejects_non_permutations(
        #[case] positions: Vec<usize>,
        #[case] expected: RankingError,
    ) {
        assert_eq!(Ranking::from_positions(positions, 3), Err(expected));
    }

    #[test]
    fn apply_reorders_items() {
        let ranking = Ranking::from_positions(vec![2, 0, 1], 3).unwrap();
        assert_eq!(ranking.apply(&["A", "B", "C"]), vec!["C", "A", "B"]);
    }

    proptest! {
        #[test]
        fn from_scores_is_always_a_permutation(scores in prop::collection::vec(-1.0e6f64..1.0e6, 1..64)) {
            let ranking = Ranking::from_scores(&scores).unwrap();
            let mut sorted = ranking.positions().to_vec();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..scores.len()).collect::<Vec<_>>());

            for pair in ranking.positions().windows(2) {
                prop_assert!(scores[pair[0]] >= scores[pair[1]]);
            }
        }
    }
}
