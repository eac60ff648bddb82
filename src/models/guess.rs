// src/models/guess.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::models::monster::MonsterOption;

/// Represents one row of the append-only 'guesses' table.
///
/// Immutable once written; `guess_num` is 1-based and strictly increasing
/// per (user_uid, quiz_date). Hint flags are stored exactly as submitted,
/// NULL for unset fields.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct GuessRecord {
    pub user_uid: String,
    pub quiz_date: NaiveDate,
    pub guess_num: i64,
    pub exact_guess_uid: Option<i64>,
    pub hint_cr: Option<bool>,
    pub hint_hp: Option<bool>,
    pub hint_movement: Option<bool>,
    pub hint_size: Option<bool>,
    pub hint_alignment: Option<bool>,
    pub hint_type: Option<bool>,
    pub hint_ac: Option<bool>,
}

/// DTO for one guess turn: an exact answer and/or any number of hint
/// requests. Every field optional; a guess with nothing set is a legal
/// "pass" turn that only consumes a guess slot.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GuessPayload {
    #[serde(rename = "exactGuessUID")]
    pub exact_guess_uid: Option<i64>,
    #[serde(rename = "hintCR")]
    pub hint_cr: Option<bool>,
    #[serde(rename = "hintHP")]
    pub hint_hp: Option<bool>,
    #[serde(rename = "hintMovement")]
    pub hint_movement: Option<bool>,
    #[serde(rename = "hintSize")]
    pub hint_size: Option<bool>,
    #[serde(rename = "hintAlignment")]
    pub hint_alignment: Option<bool>,
    #[serde(rename = "hintType")]
    pub hint_type: Option<bool>,
    #[serde(rename = "hintAC")]
    pub hint_ac: Option<bool>,
}

/// DTO for `POST /api/guess`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitGuessRequest {
    #[serde(rename = "userUID")]
    #[validate(length(min = 1, max = 128))]
    pub user_uid: String,
    pub guess: GuessPayload,
}

/// Attribute values revealed so far, keyed by hint name on the wire.
///
/// Values are always the current day's quiz attributes; requesting the same
/// hint twice re-reveals the same value. Unset hints are omitted from the
/// JSON entirely.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct RevealedHints {
    #[serde(rename = "hintCR", skip_serializing_if = "Option::is_none")]
    pub cr: Option<f64>,
    #[serde(rename = "hintHP", skip_serializing_if = "Option::is_none")]
    pub hp: Option<i64>,
    #[serde(rename = "hintMovement", skip_serializing_if = "Option::is_none")]
    pub movement: Option<i64>,
    #[serde(rename = "hintSize", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "hintAlignment", skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(rename = "hintType", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "hintAC", skip_serializing_if = "Option::is_none")]
    pub ac: Option<i64>,
}

/// Flat session response shared by `GET /api/quiz` and `POST /api/guess`:
/// revealed hints at the top level, with `correct`, `score` and
/// `availableOptions` present only when applicable.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    #[serde(flatten)]
    pub hints: RevealedHints,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<usize>,
    #[serde(rename = "availableOptions", skip_serializing_if = "Option::is_none")]
    pub available_options: Option<Vec<MonsterOption>>,
}

impl QuizResponse {
    /// State or guess response for a session still in progress.
    pub fn in_progress(hints: RevealedHints, options: Vec<MonsterOption>) -> Self {
        Self {
            hints,
            correct: None,
            score: None,
            available_options: Some(options),
        }
    }

    /// State response for a user who already solved today's quiz: revealed
    /// hints plus the win marker, never the candidate list.
    pub fn solved(hints: RevealedHints) -> Self {
        Self {
            hints,
            correct: Some(true),
            score: None,
            available_options: None,
        }
    }

    /// Response for the winning guess: `{correct: true, score}` only.
    pub fn won(score: usize) -> Self {
        Self {
            hints: RevealedHints::default(),
            correct: Some(true),
            score: Some(score),
            available_options: None,
        }
    }
}
