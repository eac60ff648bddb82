// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::{error::AppError, game::GameService, models::guess::SubmitGuessRequest};

/// Query parameters for the two GET endpoints.
#[derive(Debug, Deserialize)]
pub struct UserParams {
    #[serde(rename = "userUID")]
    pub user_uid: String,
}

/// Serves today's monster image at the user's current reveal stage.
///
/// "Today" is the server's UTC calendar date, read once here and threaded
/// through the whole computation.
pub async fn image_source(
    State(game): State<GameService>,
    Query(params): Query<UserParams>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let image = game.image(&params.user_uid, today).await?;

    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes))
}

/// Returns the user's session state: revealed hints plus either the win
/// marker or the candidate picker list.
pub async fn quiz_state(
    State(game): State<GameService>,
    Query(params): Query<UserParams>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let state = game.quiz_state(&params.user_uid, today).await?;

    Ok(Json(state))
}

/// Records a guess turn and returns the narrowed candidate list, or the win
/// result if the exact guess names today's monster.
pub async fn submit_guess(
    State(game): State<GameService>,
    Json(payload): Json<SubmitGuessRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Validation(validation_errors.to_string()));
    }

    let today = Utc::now().date_naive();
    let response = game
        .submit_guess(&payload.user_uid, payload.guess, today)
        .await?;

    Ok(Json(response))
}
