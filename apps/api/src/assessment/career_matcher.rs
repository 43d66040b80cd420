//! Career Matcher — ranks a static career catalog against a set of category
//! scores.
//!
//! Default: `WeightedCareerMatcher` (pure-Rust, deterministic). Each catalog
//! entry carries a weight profile over the five categories; the match score
//! is the weighted sum of the user's category percentages.
//!
//! `AppState` holds an `Arc<dyn CareerMatcher>`.

use serde::{Deserialize, Serialize};

use crate::assessment::scoring::{Category, CategoryScores};

/// A single ranked career suggestion returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub title: String,
    pub field: String,
    pub match_score: u32, // 0 – 100
}

/// The career matcher trait. Implement this to swap the ranking backend
/// without touching the aggregator or handlers.
pub trait CareerMatcher: Send + Sync {
    /// Returns at most `limit` recommendations, best match first.
    fn top_matches(&self, scores: &CategoryScores, limit: usize) -> Vec<CareerRecommendation>;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedCareerMatcher — built-in default
// ────────────────────────────────────────────────────────────────────────────

/// One catalog entry: weights are in canonical category order
/// (aptitude, interests, personality, emotional intelligence, skills
/// readiness) and sum to 1.0 so the match score stays in [0,100].
struct CareerProfile {
    title: &'static str,
    field: &'static str,
    weights: [f64; 5],
}

const CATALOG: &[CareerProfile] = &[
    CareerProfile {
        title: "Software Engineer",
        field: "Technology",
        weights: [0.30, 0.15, 0.10, 0.05, 0.40],
    },
    CareerProfile {
        title: "Data Scientist",
        field: "Technology",
        weights: [0.35, 0.15, 0.10, 0.05, 0.35],
    },
    CareerProfile {
        title: "UX Designer",
        field: "Design",
        weights: [0.15, 0.35, 0.15, 0.20, 0.15],
    },
    CareerProfile {
        title: "Product Manager",
        field: "Business",
        weights: [0.20, 0.20, 0.25, 0.25, 0.10],
    },
    CareerProfile {
        title: "Counseling Psychologist",
        field: "Healthcare",
        weights: [0.10, 0.15, 0.25, 0.45, 0.05],
    },
    CareerProfile {
        title: "Teacher",
        field: "Education",
        weights: [0.15, 0.20, 0.25, 0.30, 0.10],
    },
    CareerProfile {
        title: "Entrepreneur",
        field: "Business",
        weights: [0.20, 0.30, 0.25, 0.15, 0.10],
    },
    CareerProfile {
        title: "Financial Analyst",
        field: "Finance",
        weights: [0.40, 0.10, 0.15, 0.05, 0.30],
    },
    CareerProfile {
        title: "Marketing Specialist",
        field: "Business",
        weights: [0.10, 0.35, 0.20, 0.25, 0.10],
    },
    CareerProfile {
        title: "Research Scientist",
        field: "Science",
        weights: [0.40, 0.25, 0.10, 0.05, 0.20],
    },
    CareerProfile {
        title: "Human Resources Manager",
        field: "Business",
        weights: [0.10, 0.10, 0.30, 0.40, 0.10],
    },
    CareerProfile {
        title: "Technical Writer",
        field: "Technology",
        weights: [0.25, 0.25, 0.15, 0.10, 0.25],
    },
];

/// Static-catalog matcher: weighted sum of category scores, ranked
/// descending. Ties keep catalog order.
pub struct WeightedCareerMatcher;

impl WeightedCareerMatcher {
    fn match_score(profile: &CareerProfile, scores: &CategoryScores) -> u32 {
        let weighted: f64 = Category::ALL
            .into_iter()
            .zip(profile.weights)
            .map(|(category, weight)| weight * scores.get(category) as f64)
            .sum();
        weighted.round().clamp(0.0, 100.0) as u32
    }
}

impl CareerMatcher for WeightedCareerMatcher {
    fn top_matches(&self, scores: &CategoryScores, limit: usize) -> Vec<CareerRecommendation> {
        let mut ranked: Vec<CareerRecommendation> = CATALOG
            .iter()
            .map(|profile| CareerRecommendation {
                title: profile.title.to_string(),
                field: profile.field.to_string(),
                match_score: Self::match_score(profile, scores),
            })
            .collect();
        // Stable sort: equal scores preserve catalog order.
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        ranked.truncate(limit);
        ranked
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [u32; 5]) -> CategoryScores {
        CategoryScores {
            aptitude: values[0],
            interests: values[1],
            personality: values[2],
            emotional_intelligence: values[3],
            skills_readiness: values[4],
        }
    }

    #[test]
    fn test_catalog_weights_sum_to_one() {
        for profile in CATALOG {
            let sum: f64 = profile.weights.iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-9,
                "weights for {} sum to {sum}",
                profile.title
            );
        }
    }

    #[test]
    fn test_returns_at_most_limit() {
        let matcher = WeightedCareerMatcher;
        assert_eq!(matcher.top_matches(&scores([50; 5]), 5).len(), 5);
        assert_eq!(matcher.top_matches(&scores([50; 5]), 3).len(), 3);
        assert_eq!(
            matcher.top_matches(&scores([50; 5]), 100).len(),
            CATALOG.len()
        );
    }

    #[test]
    fn test_ranked_descending() {
        let matcher = WeightedCareerMatcher;
        let matches = matcher.top_matches(&scores([90, 40, 55, 30, 85]), 5);
        for pair in matches.windows(2) {
            assert!(
                pair[0].match_score >= pair[1].match_score,
                "{} ({}) ranked above {} ({})",
                pair[0].title,
                pair[0].match_score,
                pair[1].title,
                pair[1].match_score
            );
        }
    }

    #[test]
    fn test_uniform_scores_keep_catalog_order() {
        // Every profile's weights sum to 1.0, so uniform input ties them all.
        let matcher = WeightedCareerMatcher;
        let matches = matcher.top_matches(&scores([60; 5]), CATALOG.len());
        let titles: Vec<&str> = matches.iter().map(|m| m.title.as_str()).collect();
        let catalog_titles: Vec<&str> = CATALOG.iter().map(|p| p.title).collect();
        assert_eq!(titles, catalog_titles);
        assert!(matches.iter().all(|m| m.match_score == 60));
    }

    #[test]
    fn test_technical_profile_ranks_technical_careers_first() {
        let matcher = WeightedCareerMatcher;
        let matches = matcher.top_matches(&scores([95, 50, 40, 20, 95]), 3);
        assert_eq!(matches[0].title, "Software Engineer");
    }

    #[test]
    fn test_people_profile_ranks_people_careers_first() {
        let matcher = WeightedCareerMatcher;
        let matches = matcher.top_matches(&scores([20, 40, 80, 95, 15]), 3);
        assert_eq!(matches[0].title, "Counseling Psychologist");
    }

    #[test]
    fn test_match_score_bounded() {
        let matcher = WeightedCareerMatcher;
        for rec in matcher.top_matches(&scores([100; 5]), CATALOG.len()) {
            assert!(rec.match_score <= 100);
        }
        for rec in matcher.top_matches(&scores([0; 5]), CATALOG.len()) {
            assert_eq!(rec.match_score, 0);
        }
    }

    #[test]
    fn test_deterministic() {
        let matcher = WeightedCareerMatcher;
        let input = scores([73, 42, 61, 88, 19]);
        assert_eq!(
            matcher.top_matches(&input, 5),
            matcher.top_matches(&input, 5)
        );
    }
}
