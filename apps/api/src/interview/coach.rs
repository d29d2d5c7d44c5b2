//! Interview Coach — the two interview services behind the HTTP surface.
//!
//! Flow: validate inputs → render prompt → one LLM completion → return text
//! (question) or marker-split sections (feedback).
//!
//! Both operations are infallible at the signature level: every failure —
//! empty input, uninitialized model, template or completion error — comes
//! back as display text in the same fields a successful call fills. Callers
//! never see an error type cross this boundary.

use std::sync::Arc;

use tracing::{info, warn};

use crate::interview::feedback::{parse_feedback, FeedbackSections};
use crate::interview::prompts::{FEEDBACK_PROMPT_TEMPLATE, QUESTION_PROMPT_TEMPLATE};
use crate::llm_client::CompletionModel;
use crate::template::render;

pub const EMPTY_JOB_ROLE_MESSAGE: &str = "Please enter a job role to get an interview question.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please make sure all fields are filled in.";
pub const MODEL_NOT_INITIALIZED_QUESTION: &str =
    "Error: Model not initialized. Please check your API token.";
pub const MODEL_NOT_INITIALIZED_FEEDBACK: &str = "Error: Model not initialized.";

/// The interview core. Holds the completion model injected at startup;
/// `None` is the explicit degraded mode entered when no credential was
/// configured, in which both operations answer without a network call.
#[derive(Clone)]
pub struct InterviewCoach {
    model: Option<Arc<dyn CompletionModel>>,
}

impl InterviewCoach {
    pub fn new(model: Option<Arc<dyn CompletionModel>>) -> Self {
        Self { model }
    }

    pub fn model_ready(&self) -> bool {
        self.model.is_some()
    }

    /// Turns a job role into one interview question.
    ///
    /// The completion text is returned unmodified — no trimming and no check
    /// that the model actually produced a single question.
    pub async fn generate_question(&self, job_role: &str) -> String {
        if job_role.trim().is_empty() {
            return EMPTY_JOB_ROLE_MESSAGE.to_string();
        }

        let Some(model) = &self.model else {
            return MODEL_NOT_INITIALIZED_QUESTION.to_string();
        };

        let prompt = match render(QUESTION_PROMPT_TEMPLATE, &[("job_role", job_role)]) {
            Ok(prompt) => prompt,
            Err(e) => return format!("Error generating question: {e}"),
        };

        info!("Generating interview question for role '{job_role}'");

        match model.complete(&prompt).await {
            Ok(question) => question,
            Err(e) => {
                warn!("Question generation failed: {e}");
                format!("Error generating question: {e}")
            }
        }
    }

    /// Evaluates a candidate answer, returning rating / feedback / expert
    /// answer sections split out of one completion.
    pub async fn generate_feedback(
        &self,
        job_role: &str,
        question: &str,
        answer: &str,
    ) -> FeedbackSections {
        if job_role.trim().is_empty() || question.trim().is_empty() || answer.trim().is_empty() {
            return FeedbackSections::uniform(MISSING_FIELDS_MESSAGE);
        }

        let Some(model) = &self.model else {
            return FeedbackSections::uniform(MODEL_NOT_INITIALIZED_FEEDBACK);
        };

        let prompt = match render(
            FEEDBACK_PROMPT_TEMPLATE,
            &[
                ("job_role", job_role),
                ("question", question),
                ("answer", answer),
            ],
        ) {
            Ok(prompt) => prompt,
            Err(e) => return FeedbackSections::uniform(format!("Error: {e}")),
        };

        info!("Generating answer feedback for role '{job_role}'");

        match model.complete(&prompt).await {
            Ok(raw) => parse_feedback(&raw),
            Err(e) => {
                warn!("Feedback generation failed: {e}");
                FeedbackSections::uniform(format!("Error: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    /// Scripted completion model: returns a canned reply (or error) and
    /// counts how often it was called.
    struct ScriptedModel {
        reply: Result<String, String>,
        calls: AtomicUsize,
    }

    impl ScriptedModel {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionModel for ScriptedModel {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(LlmError::Api {
                    status: 500,
                    message: message.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_question_empty_job_role_skips_model() {
        let model = ScriptedModel::replying("unused");
        let coach = InterviewCoach::new(Some(model.clone()));

        let reply = coach.generate_question("   ").await;

        assert_eq!(reply, EMPTY_JOB_ROLE_MESSAGE);
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_question_uninitialized_model() {
        let coach = InterviewCoach::new(None);

        let reply = coach.generate_question("Data Scientist").await;

        assert_eq!(
            reply,
            "Error: Model not initialized. Please check your API token."
        );
    }

    #[tokio::test]
    async fn test_question_returns_completion_unmodified() {
        let model = ScriptedModel::replying("  How would you shard a Postgres table?  \n");
        let coach = InterviewCoach::new(Some(model.clone()));

        let reply = coach.generate_question("Backend Engineer").await;

        assert_eq!(reply, "  How would you shard a Postgres table?  \n");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_question_completion_error_becomes_text() {
        let model = ScriptedModel::failing("rate limited");
        let coach = InterviewCoach::new(Some(model));

        let reply = coach.generate_question("Backend Engineer").await;

        assert_eq!(
            reply,
            "Error generating question: API error (status 500): rate limited"
        );
    }

    #[tokio::test]
    async fn test_feedback_any_empty_field_skips_model() {
        let model = ScriptedModel::replying("unused");
        let coach = InterviewCoach::new(Some(model.clone()));

        let sections = coach.generate_feedback("SRE", "Why?", "  ").await;

        assert_eq!(
            sections,
            FeedbackSections::uniform(MISSING_FIELDS_MESSAGE)
        );
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_feedback_uninitialized_model() {
        let coach = InterviewCoach::new(None);

        let sections = coach.generate_feedback("SRE", "Why?", "Because.").await;

        assert_eq!(
            sections,
            FeedbackSections::uniform("Error: Model not initialized.")
        );
    }

    #[tokio::test]
    async fn test_feedback_splits_scripted_completion() {
        let model = ScriptedModel::replying(
            "RATING:\n4 - Solid answer.\nFEEDBACK:\n- Good depth\n- Missing edge cases\nEXPERT ANSWER:\nA strong reply would cover X, Y, Z.",
        );
        let coach = InterviewCoach::new(Some(model.clone()));

        let sections = coach
            .generate_feedback("Backend Engineer", "How do you scale?", "I add replicas.")
            .await;

        assert_eq!(sections.rating, "4 - Solid answer.");
        assert_eq!(sections.feedback, "- Good depth\n- Missing edge cases");
        assert_eq!(sections.expert_answer, "A strong reply would cover X, Y, Z.");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_feedback_completion_error_fills_all_fields() {
        let model = ScriptedModel::failing("connection reset");
        let coach = InterviewCoach::new(Some(model));

        let sections = coach.generate_feedback("SRE", "Why?", "Because.").await;

        assert_eq!(
            sections,
            FeedbackSections::uniform("Error: API error (status 500): connection reset")
        );
    }
}
