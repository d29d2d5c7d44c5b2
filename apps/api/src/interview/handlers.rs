//! Axum route handlers for the Interview API.
//!
//! Handlers are infallible: the coach encodes every failure as display text,
//! so there is no error branch to map to an HTTP status.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub job_role: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub job_role: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub rating: String,
    pub feedback: String,
    pub expert_answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/question
///
/// Produces one interview question for the given job role.
pub async fn handle_generate_question(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Json<QuestionResponse> {
    let question = state.coach.generate_question(&request.job_role).await;

    Json(QuestionResponse { question })
}

/// POST /api/v1/interview/feedback
///
/// Evaluates a candidate answer against the question it was given for,
/// returning rating, bullet feedback, and an expert answer.
pub async fn handle_generate_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Json<FeedbackResponse> {
    let sections = state
        .coach
        .generate_feedback(&request.job_role, &request.question, &request.answer)
        .await;

    Json(FeedbackResponse {
        rating: sections.rating,
        feedback: sections.feedback,
        expert_answer: sections.expert_answer,
    })
}
