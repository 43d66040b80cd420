//! Question Bank — resolves which answers belong to which assessment category
//! and normalizes raw point totals into percentage scores.
//!
//! Default: `StaticQuestionBank` (built-in question set, pure-Rust, fully
//! testable). The trait exists so the bank can later be swapped for a
//! database-backed one without touching the aggregator or handlers.
//!
//! `AppState` holds an `Arc<dyn QuestionBank>`.

use serde::{Deserialize, Serialize};

use crate::assessment::scoring::{AnswerSet, Category};

/// A single assessment question: its wire identifier, the prompt shown to the
/// user, and the maximum points a response can contribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub max_points: f64,
}

/// The question bank trait. Implement this to swap the question source
/// without touching the aggregator, handlers, or caller code.
pub trait QuestionBank: Send + Sync {
    /// Sums the answers belonging to `category`, normalizes against the
    /// category's maximum attainable score, and returns an integer percentage
    /// in [0,100]. A category with no matching answers scores 0, never errors.
    fn category_score(&self, answers: &AnswerSet, category: Category) -> u32;

    /// The questions belonging to `category`, in presentation order.
    fn questions(&self, category: Category) -> Vec<Question>;
}

// ────────────────────────────────────────────────────────────────────────────
// StaticQuestionBank — built-in default
// ────────────────────────────────────────────────────────────────────────────

/// Built-in question set: eight Likert-scale questions (1–5 points) per
/// category, forty in total.
pub struct StaticQuestionBank;

/// Likert scale ceiling for every built-in question.
const MAX_POINTS: f64 = 5.0;

/// (question id, prompt) pairs per category. Ids are stable wire identifiers;
/// clients submit answers keyed by them.
fn question_defs(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Aptitude => &[
            ("apt_1", "I can spot the pattern in a sequence of numbers quickly."),
            ("apt_2", "I enjoy breaking a large problem into smaller steps."),
            ("apt_3", "I find logic puzzles more fun than frustrating."),
            ("apt_4", "I can follow a complex argument without losing the thread."),
            ("apt_5", "I am comfortable estimating quantities without a calculator."),
            ("apt_6", "I notice inconsistencies in data or reports."),
            ("apt_7", "I can learn a new rule system (a game, a tool) quickly."),
            ("apt_8", "I enjoy questions that have a single verifiable answer."),
        ],
        Category::Interests => &[
            ("int_1", "I lose track of time when exploring a topic I like."),
            ("int_2", "I read or watch material about my field outside of study hours."),
            ("int_3", "I have hobbies that involve making or building things."),
            ("int_4", "I seek out people who work in careers that intrigue me."),
            ("int_5", "I keep a list of ideas or projects I want to try."),
            ("int_6", "I enjoy trying tools or techniques that are new to me."),
            ("int_7", "I volunteer for tasks others find tedious because they interest me."),
            ("int_8", "I can name three fields I would happily work in."),
        ],
        Category::Personality => &[
            ("per_1", "I stay calm when plans change at the last minute."),
            ("per_2", "I am comfortable presenting my work to a group."),
            ("per_3", "I prefer to start tasks early rather than near the deadline."),
            ("per_4", "I ask for help when I am stuck rather than struggling alone."),
            ("per_5", "I keep commitments even when they become inconvenient."),
            ("per_6", "I enjoy working in a team more than working alone."),
            ("per_7", "I take criticism of my work without taking it personally."),
            ("per_8", "I adapt my communication style to the person in front of me."),
        ],
        Category::EmotionalIntelligence => &[
            ("eq_1", "I can usually tell how someone feels before they say it."),
            ("eq_2", "I notice my own mood shifting and can name the cause."),
            ("eq_3", "I stay composed in heated discussions."),
            ("eq_4", "I check on teammates who seem withdrawn."),
            ("eq_5", "I apologize without being prompted when I am in the wrong."),
            ("eq_6", "I can deliver difficult feedback without souring the relationship."),
            ("eq_7", "I recover quickly after a setback or bad grade."),
            ("eq_8", "I listen to understand rather than to reply."),
        ],
        Category::SkillsReadiness => &[
            ("skl_1", "I have completed a project end-to-end in my field of interest."),
            ("skl_2", "I am comfortable with the standard tools of my target field."),
            ("skl_3", "I can explain a technical concept from my field to a beginner."),
            ("skl_4", "I have work (code, designs, writing) I could show an employer today."),
            ("skl_5", "I practice the core skills of my field at least weekly."),
            ("skl_6", "I have sought feedback on my work from someone experienced."),
            ("skl_7", "I can estimate how long a task in my field will take me."),
            ("skl_8", "I know what the entry-level expectations are in my target field."),
        ],
    }
}

impl QuestionBank for StaticQuestionBank {
    fn category_score(&self, answers: &AnswerSet, category: Category) -> u32 {
        let defs = question_defs(category);
        let max_attainable = defs.len() as f64 * MAX_POINTS;
        if max_attainable <= 0.0 {
            return 0;
        }
        let total: f64 = defs
            .iter()
            .filter_map(|(id, _)| answers.get(*id))
            .sum();
        // Multiply before dividing so exact halves stay exact (19*100/40 is
        // 47.5; 19/40*100 is not). Out-of-range responses are the form
        // layer's problem; the clamp keeps the [0,100] invariant regardless.
        (total * 100.0 / max_attainable).round().clamp(0.0, 100.0) as u32
    }

    fn questions(&self, category: Category) -> Vec<Question> {
        question_defs(category)
            .iter()
            .map(|(id, prompt)| Question {
                id: (*id).to_string(),
                prompt: (*prompt).to_string(),
                max_points: MAX_POINTS,
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
