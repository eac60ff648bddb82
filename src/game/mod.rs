// src/game/mod.rs

pub mod collapse;
pub mod reveal;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::guess::{GuessPayload, GuessRecord, QuizResponse};
use crate::models::quiz::DailyQuiz;
use crate::store::{AssetStore, QuizStore};

use collapse::{collapse_guesses, is_solved};
use reveal::{RevealStage, content_type_for, source_file_name};

/// Binary image content with its derived content type.
#[derive(Debug, Clone)]
pub struct ImageContent {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Session orchestrator over the injected stores.
///
/// Stateless: every operation reloads the day's quiz and the user's guess
/// history for the request's as-of date, so session state is always
/// rederived from the guess log and a new calendar date implicitly starts a
/// fresh session.
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn QuizStore>,
    assets: Arc<dyn AssetStore>,
}

impl GameService {
    pub fn new(store: Arc<dyn QuizStore>, assets: Arc<dyn AssetStore>) -> Self {
        Self { store, assets }
    }

    /// The quiz scheduled for the given as-of date, if any.
    pub async fn today_quiz(&self, today: NaiveDate) -> Result<Option<DailyQuiz>, AppError> {
        self.store.quiz_for_date(today).await
    }

    /// Resolves the image variant for the user's current reveal stage and
    /// returns its bytes with a content type derived from the file
    /// extension. Fails with NotFound when no quiz is scheduled or the
    /// variant file is absent from the asset store.
    pub async fn image(&self, user_uid: &str, today: NaiveDate) -> Result<ImageContent, AppError> {
        let quiz = self
            .today_quiz(today)
            .await?
            .ok_or_else(|| AppError::NotFound("No quiz found".to_string()))?;

        let history = self.store.guesses_for(user_uid, today).await?;
        let stage = RevealStage::select(history.len(), is_solved(&history, quiz.monster_uid));

        let bucket = stage.bucket();
        let filename = source_file_name(&quiz.image_source);

        if !self.assets.exists(&bucket, filename).await {
            return Err(AppError::NotFound("Image not found".to_string()));
        }

        let bytes = self.assets.read(&bucket, filename).await?;
        Ok(ImageContent {
            content_type: content_type_for(filename),
            bytes,
        })
    }

    /// The user's current session view: hints revealed so far, plus either
    /// the win marker or the candidate picker list.
    ///
    /// The options list is always the full catalog here; only guess
    /// submission returns the narrowed list. A solved session gets
    /// `correct: true` and no options at all.
    pub async fn quiz_state(
        &self,
        user_uid: &str,
        today: NaiveDate,
    ) -> Result<QuizResponse, AppError> {
        let quiz = self
            .today_quiz(today)
            .await?
            .ok_or_else(|| AppError::NotFound("No quiz found".to_string()))?;

        let history = self.store.guesses_for(user_uid, today).await?;
        let collapsed = collapse_guesses(&quiz, &history);

        if self
            .store
            .has_winning_guess(user_uid, today, quiz.monster_uid)
            .await?
        {
            return Ok(QuizResponse::solved(collapsed.revealed));
        }

        let options = self.store.monster_catalog().await?;
        Ok(QuizResponse::in_progress(collapsed.revealed, options))
    }

    /// Records one guess turn and reports the narrowed candidate list.
    ///
    /// * Assigns the next guess number (history length + 1) and persists the
    ///   payload exactly as submitted, unset fields as NULL.
    /// * Re-collapses the history including the new guess and filters the
    ///   catalog through the cumulative predicate set.
    /// * A correct exact guess short-circuits to `{correct, score}`, where
    ///   score counts the candidates still matching every revealed hint,
    ///   excluding the answer itself.
    ///
    /// The appended row is durable even if a later step fails; callers must
    /// re-read state via `quiz_state` instead of resubmitting blindly.
    /// Guessing an unknown monster or guessing again after winning is
    /// rejected before anything is written.
    pub async fn submit_guess(
        &self,
        user_uid: &str,
        payload: GuessPayload,
        today: NaiveDate,
    ) -> Result<QuizResponse, AppError> {
        let quiz = self
            .today_quiz(today)
            .await?
            .ok_or_else(|| AppError::NotFound("No quiz found".to_string()))?;

        if let Some(uid) = payload.exact_guess_uid {
            if !self.store.monster_exists(uid).await? {
                return Err(AppError::Validation(format!("unknown monster uid: {uid}")));
            }
        }

        if self
            .store
            .has_winning_guess(user_uid, today, quiz.monster_uid)
            .await?
        {
            return Err(AppError::Validation(
                "quiz already solved today".to_string(),
            ));
        }

        let mut history = self.store.guesses_for(user_uid, today).await?;
        let guess = GuessRecord {
            user_uid: user_uid.to_string(),
            quiz_date: quiz.quiz_date,
            guess_num: history.len() as i64 + 1,
            exact_guess_uid: payload.exact_guess_uid,
            hint_cr: payload.hint_cr,
            hint_hp: payload.hint_hp,
            hint_movement: payload.hint_movement,
            hint_size: payload.hint_size,
            hint_alignment: payload.hint_alignment,
            hint_type: payload.hint_type,
            hint_ac: payload.hint_ac,
        };

        self.store.append_guess(&guess).await?;
        tracing::info!(
            "guess {} recorded for user {} on {}",
            guess.guess_num,
            user_uid,
            quiz.quiz_date
        );
        history.push(guess);

        let collapsed = collapse_guesses(&quiz, &history);
        let options = self.store.monsters_matching(&collapsed.filters).await?;

        if payload.exact_guess_uid == Some(quiz.monster_uid) {
            return Ok(QuizResponse::won(options.len()));
        }

        Ok(QuizResponse::in_progress(collapsed.revealed, options))
    }
}
