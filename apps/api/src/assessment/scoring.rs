//! Score Aggregator — pure, deterministic transform from a raw answer set to
//! a full assessment result.
//!
//! Category membership and career ranking live behind the `QuestionBank` and
//! `CareerMatcher` traits (see sibling modules), so the aggregation itself has
//! no I/O and no failure modes: same answers in, bit-identical result out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assessment::career_matcher::{CareerMatcher, CareerRecommendation};
use crate::assessment::question_bank::QuestionBank;

/// Raw user responses keyed by question identifier. Produced by the client
/// form flow; treated as immutable once handed to the aggregator.
pub type AnswerSet = HashMap<String, f64>;

/// A category scoring at or above this is a strength.
pub const STRENGTH_THRESHOLD: u32 = 70;
/// A category scoring below this is a weakness. Scores in
/// [WEAKNESS_THRESHOLD, STRENGTH_THRESHOLD) land in neither list.
pub const WEAKNESS_THRESHOLD: u32 = 50;
/// How many career recommendations the matcher is asked for.
pub const RECOMMENDATION_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Categories
// ────────────────────────────────────────────────────────────────────────────

/// The five fixed assessment dimensions, in canonical enumeration order.
/// Strength/weakness lists and the personality-trait list all follow this
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Aptitude,
    Interests,
    Personality,
    EmotionalIntelligence,
    SkillsReadiness,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Aptitude,
        Category::Interests,
        Category::Personality,
        Category::EmotionalIntelligence,
        Category::SkillsReadiness,
    ];

    /// Internal camel-case key, as stored in answer payloads and result rows.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Aptitude => "aptitude",
            Category::Interests => "interests",
            Category::Personality => "personality",
            Category::EmotionalIntelligence => "emotionalIntelligence",
            Category::SkillsReadiness => "skillsReadiness",
        }
    }

    /// User-visible label derived from the camel-case key.
    pub fn display_name(&self) -> String {
        format_category_label(self.key())
    }

    /// The personality-trait label aliased 1:1 to this category's score.
    pub fn trait_label(&self) -> &'static str {
        match self {
            Category::Aptitude => "Analytical Thinking",
            Category::Interests => "Creativity",
            Category::Personality => "Adaptability",
            Category::EmotionalIntelligence => "Emotional Intelligence",
            Category::SkillsReadiness => "Technical Skills",
        }
    }
}

/// Converts a camel-case category key into space-separated capitalized words,
/// e.g. "emotionalIntelligence" → "Emotional Intelligence". This exact rule is
/// user-visible, so don't get clever with it.
pub fn format_category_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
    }
    label
}

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-category percentage scores, each in [0,100]. Always present for all
/// five categories; a category with no matching answers scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub aptitude: u32,
    pub interests: u32,
    pub personality: u32,
    pub emotional_intelligence: u32,
    pub skills_readiness: u32,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Aptitude => self.aptitude,
            Category::Interests => self.interests,
            Category::Personality => self.personality,
            Category::EmotionalIntelligence => self.emotional_intelligence,
            Category::SkillsReadiness => self.skills_readiness,
        }
    }

    /// Scores in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// One entry of the fixed five-trait personality readout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTrait {
    pub label: String,
    pub score: u32,
}

/// Full aggregate returned to callers: category scores, overall score,
/// strength/weakness buckets, ranked career recommendations, and the
/// five-trait readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub category_scores: CategoryScores,
    pub overall_score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub career_recommendations: Vec<CareerRecommendation>,
    pub personality_traits: Vec<PersonalityTrait>,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Scores an answer set against the question bank and assembles the complete
/// assessment result.
///
/// Total over all inputs: an empty answer set is valid and yields all-zero
/// scores (and therefore five weaknesses), never an error.
pub fn score_assessment(
    answers: &AnswerSet,
    question_bank: &dyn QuestionBank,
    career_matcher: &dyn CareerMatcher,
) -> AssessmentResult {
    let category_scores = CategoryScores {
        aptitude: question_bank.category_score(answers, Category::Aptitude),
        interests: question_bank.category_score(answers, Category::Interests),
        personality: question_bank.category_score(answers, Category::Personality),
        emotional_intelligence: question_bank
            .category_score(answers, Category::EmotionalIntelligence),
        skills_readiness: question_bank.category_score(answers, Category::SkillsReadiness),
    };

    let total: u32 = category_scores.iter().map(|(_, s)| s).sum();
    // Round-half-up mean of the five percentages.
    let overall_score = (total as f64 / Category::ALL.len() as f64).round() as u32;

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for (category, score) in category_scores.iter() {
        if score >= STRENGTH_THRESHOLD {
            strengths.push(category.display_name());
        } else if score < WEAKNESS_THRESHOLD {
            weaknesses.push(category.display_name());
        }
        // [50,70) is the deliberate mid-band: neither strength nor weakness.
    }

    let career_recommendations = career_matcher.top_matches(&category_scores, RECOMMENDATION_LIMIT);

    let personality_traits = Category::ALL
        .into_iter()
        .map(|c| PersonalityTrait {
            label: c.trait_label().to_string(),
            score: category_scores.get(c),
        })
        .collect();

    AssessmentResult {
        category_scores,
        overall_score,
        strengths,
        weaknesses,
        career_recommendations,
        personality_traits,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::question_bank::Question;

    /// Question bank stub returning fixed percentages in canonical order.
    struct StubBank([u32; 5]);

    impl QuestionBank for StubBank {
        fn category_score(&self, _answers: &AnswerSet, category: Category) -> u32 {
            let idx = Category::ALL.iter().position(|c| *c == category).unwrap();
            self.0[idx]
        }

        fn questions(&self, _category: Category) -> Vec<Question> {
            vec![]
        }
    }

    /// Matcher stub recording nothing; returns one canned recommendation per
    /// requested slot so pass-through and limit behavior are visible.
    struct StubMatcher;

    impl CareerMatcher for StubMatcher {
        fn top_matches(
            &self,
            scores: &CategoryScores,
            limit: usize,
        ) -> Vec<CareerRecommendation> {
            (0..limit)
                .map(|i| CareerRecommendation {
                    title: format!("Career {i}"),
                    field: "test".to_string(),
                    match_score: scores.aptitude,
                })
                .collect()
        }
    }

    fn score(scores: [u32; 5]) -> AssessmentResult {
        score_assessment(&AnswerSet::new(), &StubBank(scores), &StubMatcher)
    }

    #[test]
    fn test_empty_answer_set_is_all_zero() {
        let result = score([0, 0, 0, 0, 0]);
        assert_eq!(result.overall_score, 0);
        assert!(result.strengths.is_empty());
        assert_eq!(
            result.weaknesses,
            vec![
                "Aptitude",
                "Interests",
                "Personality",
                "Emotional Intelligence",
                "Skills Readiness"
            ]
        );
    }

    #[test]
    fn test_reference_score_vector() {
        // (90+85+60+40+72)/5 = 69.4 → 69
        let result = score([90, 85, 60, 40, 72]);
        assert_eq!(result.overall_score, 69);
        assert_eq!(
            result.strengths,
            vec!["Aptitude", "Interests", "Skills Readiness"]
        );
        assert_eq!(result.weaknesses, vec!["Emotional Intelligence"]);
        // Personality (60) sits in the mid-band: in neither list.
        assert!(!result.strengths.contains(&"Personality".to_string()));
        assert!(!result.weaknesses.contains(&"Personality".to_string()));
    }

    #[test]
    fn test_overall_mean_rounds_to_nearest() {
        // Integer scores over 5 categories give fractional parts of
        // {.0, .2, .4, .6, .8} only; .4 must round down and .6 up.
        assert_eq!(score([70, 70, 70, 71, 71]).overall_score, 70); // 70.4
        assert_eq!(score([70, 70, 71, 71, 71]).overall_score, 71); // 70.6
        assert_eq!(score([100, 100, 100, 100, 100]).overall_score, 100);
    }

    #[test]
    fn test_idempotent_for_same_input() {
        let mut answers = AnswerSet::new();
        answers.insert("q1".to_string(), 4.0);
        answers.insert("q2".to_string(), 2.0);
        let bank = StubBank([90, 85, 60, 40, 72]);
        let first = score_assessment(&answers, &bank, &StubMatcher);
        let second = score_assessment(&answers, &bank, &StubMatcher);
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_name_formatting_is_exact() {
        assert_eq!(
            Category::EmotionalIntelligence.display_name(),
            "Emotional Intelligence"
        );
        assert_eq!(
            Category::SkillsReadiness.display_name(),
            "Skills Readiness"
        );
        assert_eq!(Category::Aptitude.display_name(), "Aptitude");
        assert_eq!(format_category_label("emotionalIntelligence"), "Emotional Intelligence");
        assert_eq!(format_category_label("skillsReadiness"), "Skills Readiness");
    }

    #[test]
    fn test_personality_traits_fixed_order_and_arity() {
        let result = score([10, 20, 30, 40, 50]);
        let labels: Vec<&str> = result
            .personality_traits
            .iter()
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Analytical Thinking",
                "Creativity",
                "Adaptability",
                "Emotional Intelligence",
                "Technical Skills"
            ]
        );
        let scores: Vec<u32> = result.personality_traits.iter().map(|t| t.score).collect();
        assert_eq!(scores, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_traits_always_five_even_for_empty_input() {
        assert_eq!(score([0, 0, 0, 0, 0]).personality_traits.len(), 5);
        assert_eq!(score([100, 100, 100, 100, 100]).personality_traits.len(), 5);
    }

    #[test]
    fn test_threshold_boundaries() {
        // Exactly 70 is a strength.
        let result = score([70, 0, 0, 0, 0]);
        assert!(result.strengths.contains(&"Aptitude".to_string()));
        // Exactly 50 is neither a strength nor a weakness.
        let result = score([50, 0, 0, 0, 0]);
        assert!(!result.strengths.contains(&"Aptitude".to_string()));
        assert!(!result.weaknesses.contains(&"Aptitude".to_string()));
        // 49 is a weakness.
        let result = score([49, 0, 0, 0, 0]);
        assert!(result.weaknesses.contains(&"Aptitude".to_string()));
        // 69 is not a strength.
        let result = score([69, 100, 100, 100, 100]);
        assert!(!result.strengths.contains(&"Aptitude".to_string()));
    }

    #[test]
    fn test_bucket_order_follows_enumeration_order() {
        let result = score([71, 40, 95, 30, 80]);
        assert_eq!(
            result.strengths,
            vec!["Aptitude", "Personality", "Skills Readiness"]
        );
        assert_eq!(result.weaknesses, vec!["Interests", "Emotional Intelligence"]);
    }

    #[test]
    fn test_recommendations_pass_through_with_limit_five() {
        let result = score([42, 0, 0, 0, 0]);
        assert_eq!(result.career_recommendations.len(), RECOMMENDATION_LIMIT);
        assert_eq!(result.career_recommendations[0].title, "Career 0");
        assert_eq!(result.career_recommendations[0].match_score, 42);
    }
}
