// src/game/collapse.rs

use crate::models::guess::{GuessRecord, RevealedHints};
use crate::models::quiz::DailyQuiz;

/// One predicate over the monster catalog, produced by collapsing a guess
/// history. The store translates these into its own query language.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateFilter {
    /// A candidate ruled out by an exact (wrong or winning) guess.
    ExcludeId(i64),
    CrEquals(f64),
    HpEquals(i64),
    SpeedEquals(i64),
    SizeEquals(String),
    AlignmentEquals(String),
    TypeEquals(String),
    AcEquals(i64),
}

/// Result of folding a guess history: the candidate predicate set and the
/// hint values revealed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollapsedGuesses {
    pub filters: Vec<CandidateFilter>,
    pub revealed: RevealedHints,
}

/// Folds the full ordered guess history of a user's current-day session.
///
/// Every exact guess excludes that candidate; every hint flag that was ever
/// set pins the corresponding attribute to the day's quiz value. Hint values
/// are read from `quiz`, never from the stored guess, so requesting the same
/// hint twice is idempotent and there is no un-reveal. Guesses with nothing
/// set (pass turns) contribute nothing.
pub fn collapse_guesses(quiz: &DailyQuiz, history: &[GuessRecord]) -> CollapsedGuesses {
    let mut collapsed = CollapsedGuesses::default();

    for guess in history {
        if let Some(uid) = guess.exact_guess_uid {
            collapsed.filters.push(CandidateFilter::ExcludeId(uid));
        }
        if guess.hint_cr.unwrap_or(false) {
            collapsed.filters.push(CandidateFilter::CrEquals(quiz.cr_val));
            collapsed.revealed.cr = Some(quiz.cr_val);
        }
        if guess.hint_hp.unwrap_or(false) {
            collapsed.filters.push(CandidateFilter::HpEquals(quiz.hp));
            collapsed.revealed.hp = Some(quiz.hp);
        }
        if guess.hint_movement.unwrap_or(false) {
            collapsed.filters.push(CandidateFilter::SpeedEquals(quiz.speed));
            collapsed.revealed.movement = Some(quiz.speed);
        }
        if guess.hint_size.unwrap_or(false) {
            collapsed
                .filters
                .push(CandidateFilter::SizeEquals(quiz.size_val.clone()));
            collapsed.revealed.size = Some(quiz.size_val.clone());
        }
        if guess.hint_alignment.unwrap_or(false) {
            collapsed
                .filters
                .push(CandidateFilter::AlignmentEquals(quiz.alignment.clone()));
            collapsed.revealed.alignment = Some(quiz.alignment.clone());
        }
        if guess.hint_type.unwrap_or(false) {
            collapsed
                .filters
                .push(CandidateFilter::TypeEquals(quiz.kind.clone()));
            collapsed.revealed.kind = Some(quiz.kind.clone());
        }
        if guess.hint_ac.unwrap_or(false) {
            collapsed.filters.push(CandidateFilter::AcEquals(quiz.ac));
            collapsed.revealed.ac = Some(quiz.ac);
        }
    }

    collapsed
}

/// Whether any guess in the history names the day's monster exactly.
/// Order-independent; a user's win is defined solely by such a row existing.
pub fn is_solved(history: &[GuessRecord], monster_uid: i64) -> bool {
    history
        .iter()
        .any(|guess| guess.exact_guess_uid == Some(monster_uid))
}
