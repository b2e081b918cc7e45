use clap::ValueEnum;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use thiserror::Error;
use tracing::trace;

use crate::quiz::definition::{Question, QuestionId};


#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Strategy {
    /// Any other answer from the quiz.
    Random,
    /// Answers that are spelled the most like the correct one.
    Similarity,
    /// Nearby numbers for numeric answers, similar spellings otherwise.
    Hybrid,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum DistractorError {
    #[error("Cannot pick {required} distractors, only {available} distinct wrong answers exist")]
    InsufficientCandidates { required: usize, available: usize },
}

/// Picks the wrong answers shown alongside the correct answer of a question.
#[derive(Clone, Debug)]
pub struct DistractorSelector {
    strategy: Strategy,
    count: usize,
    numeric_window: u64,
    similarity_shortlist: usize,
}

impl Default for DistractorSelector {
    fn default() -> Self {
        DistractorSelector {
            strategy: Strategy::Hybrid,
            count: 3,
            numeric_window: 5,
            similarity_shortlist: 10,
        }
    }
}

impl DistractorSelector {
    pub fn new(
        strategy: Strategy,
        count: usize,
        numeric_window: u64,
        similarity_shortlist: usize,
    ) -> Self {
        DistractorSelector {
            strategy,
            count,
            numeric_window,
            similarity_shortlist,
        }
    }

    pub fn with_count(&self, count: usize) -> Self {
        DistractorSelector {
            count,
            ..self.clone()
        }
    }

    #[cfg(test)]
    pub fn get_count(&self) -> usize {
        self.count
    }

    /// Returns `count` distinct answers from `pool`, none of them equal to `correct`.
    /// The question identified by `current` never contributes a candidate.
    ///
    /// Candidates are first drawn from a strategy-specific shortlist. When the shortlist
    /// is too short, the remaining slots are filled with random answers from the rest of the pool.
    pub fn select<R: Rng + ?Sized>(
        &self,
        correct: &str,
        current: QuestionId,
        pool: &[Question],
        rng: &mut R,
    ) -> Result<Vec<String>, DistractorError> {
        let candidates: Vec<&str> = pool
            .iter()
            .filter(|q| q.id != current)
            .map(|q| q.answer.as_str())
            .collect();

        let shortlist = match self.strategy {
            Strategy::Random => candidates.clone(),
            Strategy::Similarity => self.rank_by_similarity(correct, &candidates),
            Strategy::Hybrid => match parse_integer(correct) {
                Some(value) => self.nearby_numbers(value, &candidates),
                None => self.rank_by_similarity(correct, &candidates),
            },
        };

        let mut chosen: Vec<&str> = shortlist
            .into_iter()
            .unique()
            .filter(|answer| *answer != correct)
            .collect();
        trace!("Shortlisted distractors for {}: {:?}", current, chosen);

        if chosen.len() >= self.count {
            return Ok(chosen
                .choose_multiple(rng, self.count)
                .map(|answer| answer.to_string())
                .collect());
        }

        let fill: Vec<&str> = candidates
            .into_iter()
            .unique()
            .filter(|answer| *answer != correct && !chosen.contains(answer))
            .collect();
        let missing = self.count - chosen.len();
        if fill.len() < missing {
            return Err(DistractorError::InsufficientCandidates {
                required: self.count,
                available: chosen.len() + fill.len(),
            });
        }
        chosen.extend(fill.choose_multiple(rng, missing));

        Ok(chosen.into_iter().map(|answer| answer.to_owned()).collect())
    }

    fn nearby_numbers<'a>(&self, value: i64, candidates: &[&'a str]) -> Vec<&'a str> {
        candidates
            .iter()
            .copied()
            .filter(|candidate| match parse_integer(candidate) {
                Some(other) => other
                    .checked_sub(value)
                    .map_or(false, |distance| distance.unsigned_abs() <= self.numeric_window),
                None => false,
            })
            .collect()
    }

    fn rank_by_similarity<'a>(&self, correct: &str, candidates: &[&'a str]) -> Vec<&'a str> {
        let mut scored: Vec<(&str, f64)> = candidates
            .iter()
            .map(|candidate| (*candidate, similarity(correct, candidate)))
            .collect();
        scored.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .take(self.similarity_shortlist)
            .map(|(candidate, _)| candidate)
            .collect()
    }
}

/// Normalized edit-distance similarity, from 0 (nothing in common) to 1 (identical).
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

fn parse_integer(answer: &str) -> Option<i64> {
    answer.trim().parse().ok()
}
