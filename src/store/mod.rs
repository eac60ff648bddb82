// src/store/mod.rs

pub mod assets;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::AppError;
use crate::game::collapse::CandidateFilter;
use crate::models::guess::GuessRecord;
use crate::models::monster::MonsterOption;
use crate::models::quiz::DailyQuiz;

/// Quiz schedule, monster catalog and append-only guess log.
///
/// Injected into the orchestrator at construction so request handling never
/// names a concrete database type; tests substitute in-memory doubles.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// The quiz scheduled for `date`, joined with its monster's attribute
    /// snapshot. `None` means no quiz is scheduled, which is not an error.
    async fn quiz_for_date(&self, date: NaiveDate) -> Result<Option<DailyQuiz>, AppError>;

    /// The full candidate catalog as {uid, name} pairs.
    async fn monster_catalog(&self) -> Result<Vec<MonsterOption>, AppError>;

    /// Candidates surviving every filter in `filters`; an empty list
    /// matches the whole catalog.
    async fn monsters_matching(
        &self,
        filters: &[CandidateFilter],
    ) -> Result<Vec<MonsterOption>, AppError>;

    /// Whether a monster with this uid exists in the catalog.
    async fn monster_exists(&self, uid: i64) -> Result<bool, AppError>;

    /// Appends one guess row. Rows are immutable once written.
    async fn append_guess(&self, guess: &GuessRecord) -> Result<(), AppError>;

    /// A user's guesses for one date, ordered by guess number ascending.
    async fn guesses_for(
        &self,
        user_uid: &str,
        date: NaiveDate,
    ) -> Result<Vec<GuessRecord>, AppError>;

    /// Whether the user already has a guess row naming `monster_uid` for
    /// this date.
    async fn has_winning_guess(
        &self,
        user_uid: &str,
        date: NaiveDate,
        monster_uid: i64,
    ) -> Result<bool, AppError>;
}

/// Read access to the reveal-stage image buckets.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Whether `filename` exists in `bucket`. Probe failures read as
    /// absent, matching the 404 the caller turns that into.
    async fn exists(&self, bucket: &str, filename: &str) -> bool;

    /// Raw bytes of `filename` in `bucket`.
    async fn read(&self, bucket: &str, filename: &str) -> Result<Vec<u8>, AppError>;
}
