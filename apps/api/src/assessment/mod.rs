// Assessment engine.
// Implements: question bank resolution, category scoring, the pure score
// aggregator, career matching, and the HTTP handlers around them.
// The aggregator itself does no I/O — persistence happens in handlers only.

pub mod career_matcher;
pub mod handlers;
pub mod question_bank;
pub mod scoring;
