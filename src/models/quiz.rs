// src/models/quiz.rs

use chrono::NaiveDate;
use sqlx::prelude::FromRow;

/// The day's quiz joined with its target monster's attributes.
///
/// One row of `quizzes` joined against `monsters`; `quiz_date` is unique so
/// at most one of these exists per calendar date. Hint values and candidate
/// filters are always read from this snapshot, never from stored guesses.
#[derive(Debug, Clone, FromRow)]
pub struct DailyQuiz {
    pub quiz_date: NaiveDate,
    pub monster_uid: i64,

    /// Challenge rating of the target monster.
    pub cr_val: f64,
    pub hp: i64,
    pub speed: i64,
    pub size_val: String,
    pub alignment: String,

    /// Creature type (e.g. "dragon", "undead").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    pub kind: String,

    /// Armor class.
    pub ac: i64,

    /// Source path of the monster image; only its basename addresses the
    /// per-reveal-stage asset buckets.
    pub image_source: String,
}
