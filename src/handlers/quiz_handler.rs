use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuizRequest, GradeQuizRequest},
    models::dto::response::{CreateQuizResponse, GradeQuizResponse, QuizViewDto},
    services::{GradeService, DEFAULT_QUESTION_COUNT},
};

#[post("/api/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let topic = request
        .resolved_topic()
        .ok_or_else(|| AppError::ValidationError("Falta 'topic'".to_string()))?;
    let question_count = request.n.unwrap_or(DEFAULT_QUESTION_COUNT);

    let quiz_id = state.quiz_service.create_quiz(topic, question_count).await?;
    Ok(HttpResponse::Created().json(CreateQuizResponse::from_id(quiz_id)))
}

#[get("/api/quizzes/{id}")]
async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizViewDto::from(quiz)))
}

#[post("/api/quizzes/{id}/grade")]
async fn grade_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<GradeQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    let result = GradeService::grade(&quiz, &request.answers);

    Ok(HttpResponse::Ok().json(GradeQuizResponse::new(&quiz, result)))
}
