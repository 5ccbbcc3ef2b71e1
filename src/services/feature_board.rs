//! Admin feature board: vote counts, category filter and ordering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::feature::{Feature, FeatureCategory, FeatureVote};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSort {
    #[default]
    Votes,
    Priority,
    Status,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedFeature {
    #[serde(flatten)]
    pub feature: Feature,
    pub votes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureBoard {
    pub features: Vec<RankedFeature>,
    /// Votes across all features, before category filtering.
    pub total_votes: u32,
}

pub fn count_votes(votes: &[FeatureVote]) -> HashMap<Uuid, u32> {
    let mut counts = HashMap::new();
    for vote in votes.iter().filter(|v| v.voted) {
        *counts.entry(vote.feature_id).or_insert(0) += 1;
    }
    counts
}

/// Builds the board. `features` keep their incoming order for ties, so pass
/// them newest first.
pub fn build_board(
    features: Vec<Feature>,
    votes: &[FeatureVote],
    category: Option<FeatureCategory>,
    sort: FeatureSort,
) -> FeatureBoard {
    let counts = count_votes(votes);
    let ranked: Vec<RankedFeature> = features
        .into_iter()
        .map(|feature| {
            let votes = counts.get(&feature.id).copied().unwrap_or(0);
            RankedFeature { feature, votes }
        })
        .collect();
    let total_votes = ranked.iter().map(|f| f.votes).sum();

    let mut features: Vec<RankedFeature> = ranked
        .into_iter()
        .filter(|f| category.map_or(true, |c| f.feature.category == c))
        .collect();
    match sort {
        FeatureSort::Votes => features.sort_by(|a, b| b.votes.cmp(&a.votes)),
        FeatureSort::Priority => {
            features.sort_by(|a, b| b.feature.priority.rank().cmp(&a.feature.priority.rank()))
        }
        FeatureSort::Status => {
            features.sort_by(|a, b| b.feature.status.rank().cmp(&a.feature.status.rank()))
        }
    }

    FeatureBoard { features, total_votes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feature::{FeaturePriority, FeatureStatus};

    fn feature(title: &str, category: FeatureCategory, status: FeatureStatus, priority: FeaturePriority) -> Feature {
        Feature {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            category,
            status,
            priority,
            estimated_release: None,
            icon: "dashboard".into(),
            created_at: None,
            updated_at: None,
        }
    }

    fn vote(feature: &Feature, voted: bool) -> FeatureVote {
        FeatureVote { feature_id: feature.id, user_id: Some(Uuid::new_v4()), voted }
    }

    fn titles(board: &FeatureBoard) -> Vec<&str> {
        board.features.iter().map(|f| f.feature.title.as_str()).collect()
    }

    fn sample() -> (Vec<Feature>, Vec<FeatureVote>) {
        let scan = feature("Scan", FeatureCategory::Optimization, FeatureStatus::Released, FeaturePriority::Low);
        let pos = feature("POS", FeatureCategory::Premium, FeatureStatus::InDevelopment, FeaturePriority::Medium);
        let forecast = feature("Forecast", FeatureCategory::Analytics, FeatureStatus::Planned, FeaturePriority::High);
        let votes = vec![
            vote(&pos, true),
            vote(&pos, true),
            vote(&pos, false),
            vote(&scan, true),
            vote(&forecast, true),
            vote(&forecast, true),
            vote(&forecast, true),
        ];
        (vec![scan, pos, forecast], votes)
    }

    #[test]
    fn only_positive_votes_count() {
        let (features, votes) = sample();
        let board = build_board(features, &votes, None, FeatureSort::Votes);
        assert_eq!(titles(&board), ["Forecast", "POS", "Scan"]);
        assert_eq!(board.total_votes, 6);
        assert_eq!(board.features[1].votes, 2);
    }

    #[test]
    fn priority_and_status_orderings() {
        let (features, votes) = sample();
        let board = build_board(features.clone(), &votes, None, FeatureSort::Priority);
        assert_eq!(titles(&board), ["Forecast", "POS", "Scan"]);

        let board = build_board(features, &votes, None, FeatureSort::Status);
        assert_eq!(titles(&board), ["POS", "Forecast", "Scan"]);
    }

    #[test]
    fn category_filter_keeps_global_vote_total() {
        let (features, votes) = sample();
        let board = build_board(features, &votes, Some(FeatureCategory::Premium), FeatureSort::Votes);
        assert_eq!(titles(&board), ["POS"]);
        assert_eq!(board.total_votes, 6);
    }
}
