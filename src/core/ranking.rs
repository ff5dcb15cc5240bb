use std::cmp::Ordering;

use crate::core::scoring::calculate_recommendation_score;
use crate::models::{Club, GolferPreferences, ScoredClub, ScoringWeights};

/// One page of ranked candidates plus the full in-range count
#[derive(Debug)]
pub struct RankedPage {
    pub results: Vec<ScoredClub>,
    pub total: usize,
}

/// Ranking stage of the recommendation pipeline
///
/// Takes the candidates the proximity query produced, scores every one of
/// them, sorts the whole set and only then slices out the requested page.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score, sort and paginate a candidate set
    ///
    /// A candidate that fails to score is logged and kept with score 0 -
    /// single-candidate failures never abort the batch, and the result count
    /// stays deterministic. Sort order: score descending, then distance
    /// ascending, then club id ascending so repeated calls always produce the
    /// same ordering. Pagination happens strictly after the full sort.
    pub fn rank(
        &self,
        preferences: &GolferPreferences,
        candidates: Vec<(Club, f64)>,
        offset: usize,
        limit: usize,
    ) -> RankedPage {
        let total = candidates.len();

        let mut scored: Vec<ScoredClub> = candidates
            .into_iter()
            .map(|(club, distance_miles)| {
                let score = match calculate_recommendation_score(
                    &club,
                    preferences,
                    distance_miles,
                    &self.weights,
                ) {
                    Ok(score) => score,
                    Err(e) => {
                        tracing::warn!("scoring failed for club {}: {}", club.id, e);
                        0.0
                    }
                };

                ScoredClub {
                    club,
                    distance_miles,
                    score,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    a.distance_miles
                        .partial_cmp(&b.distance_miles)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.club.id.cmp(&b.club.id))
        });

        let results = scored.into_iter().skip(offset).take(limit).collect();

        RankedPage { results, total }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
