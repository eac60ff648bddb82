// src/store/postgres.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::AppError;
use crate::game::collapse::CandidateFilter;
use crate::models::guess::GuessRecord;
use crate::models::monster::MonsterOption;
use crate::models::quiz::DailyQuiz;

use super::QuizStore;

/// PostgreSQL-backed quiz store over a shared connection pool.
#[derive(Clone)]
pub struct PgQuizStore {
    pool: PgPool,
}

impl PgQuizStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizStore for PgQuizStore {
    async fn quiz_for_date(&self, date: NaiveDate) -> Result<Option<DailyQuiz>, AppError> {
        let quiz = sqlx::query_as::<_, DailyQuiz>(
            r#"
            SELECT
                q.quiz_date,
                q.monster_uid,
                m.cr_val,
                m.hp,
                m.speed,
                m.size_val,
                m.alignment,
                m.type,
                m.ac,
                m.image_source
            FROM quizzes q
            JOIN monsters m ON m.uid = q.monster_uid
            WHERE q.quiz_date = $1
            "#,
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

    async fn monster_catalog(&self) -> Result<Vec<MonsterOption>, AppError> {
        let monsters = sqlx::query_as::<_, MonsterOption>("SELECT uid, name FROM monsters")
            .fetch_all(&self.pool)
            .await?;

        Ok(monsters)
    }

    async fn monsters_matching(
        &self,
        filters: &[CandidateFilter],
    ) -> Result<Vec<MonsterOption>, AppError> {
        // Dynamic WHERE clause built filter by filter; duplicates from the
        // collapser are harmless repeats of the same condition.
        let mut query = QueryBuilder::<Postgres>::new("SELECT uid, name FROM monsters");

        for (i, filter) in filters.iter().enumerate() {
            query.push(if i == 0 { " WHERE " } else { " AND " });
            match filter {
                CandidateFilter::ExcludeId(uid) => {
                    query.push("uid <> ").push_bind(*uid);
                }
                CandidateFilter::CrEquals(value) => {
                    query.push("cr_val = ").push_bind(*value);
                }
                CandidateFilter::HpEquals(value) => {
                    query.push("hp = ").push_bind(*value);
                }
                CandidateFilter::SpeedEquals(value) => {
                    query.push("speed = ").push_bind(*value);
                }
                CandidateFilter::SizeEquals(value) => {
                    query.push("size_val = ").push_bind(value.clone());
                }
                CandidateFilter::AlignmentEquals(value) => {
                    query.push("alignment = ").push_bind(value.clone());
                }
                CandidateFilter::TypeEquals(value) => {
                    query.push("type = ").push_bind(value.clone());
                }
                CandidateFilter::AcEquals(value) => {
                    query.push("ac = ").push_bind(*value);
                }
            }
        }

        let monsters = query
            .build_query_as::<MonsterOption>()
            .fetch_all(&self.pool)
            .await?;

        Ok(monsters)
    }

    async fn monster_exists(&self, uid: i64) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM monsters WHERE uid = $1)")
                .bind(uid)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn append_guess(&self, guess: &GuessRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO guesses
                (user_uid, quiz_date, guess_num, exact_guess_uid,
                 hint_cr, hint_hp, hint_movement, hint_size,
                 hint_alignment, hint_type, hint_ac)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&guess.user_uid)
        .bind(guess.quiz_date)
        .bind(guess.guess_num)
        .bind(guess.exact_guess_uid)
        .bind(guess.hint_cr)
        .bind(guess.hint_hp)
        .bind(guess.hint_movement)
        .bind(guess.hint_size)
        .bind(guess.hint_alignment)
        .bind(guess.hint_type)
        .bind(guess.hint_ac)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn guesses_for(
        &self,
        user_uid: &str,
        date: NaiveDate,
    ) -> Result<Vec<GuessRecord>, AppError> {
        let guesses = sqlx::query_as::<_, GuessRecord>(
            r#"
            SELECT
                user_uid, quiz_date, guess_num, exact_guess_uid,
                hint_cr, hint_hp, hint_movement, hint_size,
                hint_alignment, hint_type, hint_ac
            FROM guesses
            WHERE user_uid = $1 AND quiz_date = $2
            ORDER BY guess_num ASC
            "#,
        )
        .bind(user_uid)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(guesses)
    }

    async fn has_winning_guess(
        &self,
        user_uid: &str,
        date: NaiveDate,
        monster_uid: i64,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM guesses
                WHERE user_uid = $1 AND quiz_date = $2 AND exact_guess_uid = $3
            )
            "#,
        )
        .bind(user_uid)
        .bind(date)
        .bind(monster_uid)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
