use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    constants::canned::quiz_created_reply,
    errors::AppError,
    models::dto::request::ChatRequest,
    models::dto::response::{ChatResponse, QuizCreatedChatResponse},
    services::{intent, DEFAULT_QUESTION_COUNT},
};

#[post("/api/chat")]
async fn resolve_chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let resolved = state
        .chat_service
        .resolve(&request.message, request.level.as_deref())
        .await;

    Ok(HttpResponse::Ok().json(ChatResponse::from(resolved)))
}

/// Chat that may branch into quiz creation: when the message carries a quiz
/// trigger phrase, a quiz is generated and stored and the reply points at it.
/// Everything else behaves exactly like `resolve_chat`.
#[post("/api/chat/extended")]
async fn chat_or_quiz(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    if let Some(topic) = intent::detect_quiz_request(&request.message) {
        let quiz_id = state
            .quiz_service
            .create_quiz(&topic, DEFAULT_QUESTION_COUNT)
            .await?;
        let response = QuizCreatedChatResponse::new(quiz_created_reply(&topic), quiz_id);
        return Ok(HttpResponse::Ok().json(response));
    }

    let resolved = state
        .chat_service
        .resolve(&request.message, request.level.as_deref())
        .await;

    Ok(HttpResponse::Ok().json(ChatResponse::from(resolved)))
}
