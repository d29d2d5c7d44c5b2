//! Feedback parsing — splits the model's free-text evaluation into the three
//! display fields using the literal section headers the feedback prompt asks
//! for.
//!
//! The split is intentionally forgiving: a missing header degrades the
//! affected fields to fixed placeholder text instead of failing the request.

use serde::Serialize;

pub const RATING_MARKER: &str = "RATING:";
pub const FEEDBACK_MARKER: &str = "FEEDBACK:";
pub const EXPERT_ANSWER_MARKER: &str = "EXPERT ANSWER:";

pub const RATING_FALLBACK: &str = "Unable to extract rating.";
pub const FEEDBACK_FALLBACK: &str = "Processing error. Couldn't extract feedback.";
pub const EXPERT_ANSWER_FALLBACK: &str = "Processing error. Couldn't extract expert answer.";
pub const NO_EXPERT_ANSWER: &str = "No expert answer provided.";

/// The three sections of an evaluated answer, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSections {
    pub rating: String,
    pub feedback: String,
    pub expert_answer: String,
}

impl FeedbackSections {
    /// The same message in all three fields. Used for input validation and
    /// request-level failures, which have no per-section detail.
    pub fn uniform(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            rating: message.clone(),
            feedback: message.clone(),
            expert_answer: message,
        }
    }
}

/// Splits a raw evaluation into (rating, feedback, expert answer).
///
/// Markers are located by first occurrence, in order; text before `RATING:`
/// is discarded. Each field is the trimmed text strictly between its marker
/// and the next one, with the trimmed remainder after `EXPERT ANSWER:` as the
/// expert answer. Missing markers degrade per field:
/// - no `RATING:` — all three fields get their placeholder text
/// - no `FEEDBACK:` — the rating keeps the full remainder after `RATING:`,
///   the other two fields get their placeholder text
/// - no `EXPERT ANSWER:` — the feedback keeps the full remainder after
///   `FEEDBACK:` and the expert answer reports that none was provided
pub fn parse_feedback(raw: &str) -> FeedbackSections {
    let Some((_, after_rating)) = raw.split_once(RATING_MARKER) else {
        return FeedbackSections {
            rating: RATING_FALLBACK.to_string(),
            feedback: FEEDBACK_FALLBACK.to_string(),
            expert_answer: EXPERT_ANSWER_FALLBACK.to_string(),
        };
    };

    let Some((rating, after_feedback)) = after_rating.split_once(FEEDBACK_MARKER) else {
        return FeedbackSections {
            rating: after_rating.trim().to_string(),
            feedback: FEEDBACK_FALLBACK.to_string(),
            expert_answer: EXPERT_ANSWER_FALLBACK.to_string(),
        };
    };

    match after_feedback.split_once(EXPERT_ANSWER_MARKER) {
        Some((feedback, expert_answer)) => FeedbackSections {
            rating: rating.trim().to_string(),
            feedback: feedback.trim().to_string(),
            expert_answer: expert_answer.trim().to_string(),
        },
        None => FeedbackSections {
            rating: rating.trim().to_string(),
            feedback: after_feedback.trim().to_string(),
            expert_answer: NO_EXPERT_ANSWER.to_string(),
        },
    }
}
