// tests/common/mod.rs

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;

use monsterquiz::error::AppError;
use monsterquiz::game::collapse::CandidateFilter;
use monsterquiz::models::guess::GuessRecord;
use monsterquiz::models::monster::MonsterOption;
use monsterquiz::models::quiz::DailyQuiz;
use monsterquiz::store::{AssetStore, QuizStore};

/// One catalog row with the full attribute set, mirroring the `monsters`
/// table.
#[derive(Debug, Clone)]
pub struct Monster {
    pub uid: i64,
    pub name: String,
    pub cr_val: f64,
    pub hp: i64,
    pub speed: i64,
    pub size_val: String,
    pub alignment: String,
    pub kind: String,
    pub ac: i64,
    pub image_source: String,
}

impl Monster {
    fn survives(&self, filter: &CandidateFilter) -> bool {
        match filter {
            CandidateFilter::ExcludeId(uid) => self.uid != *uid,
            CandidateFilter::CrEquals(value) => self.cr_val == *value,
            CandidateFilter::HpEquals(value) => self.hp == *value,
            CandidateFilter::SpeedEquals(value) => self.speed == *value,
            CandidateFilter::SizeEquals(value) => self.size_val == *value,
            CandidateFilter::AlignmentEquals(value) => self.alignment == *value,
            CandidateFilter::TypeEquals(value) => self.kind == *value,
            CandidateFilter::AcEquals(value) => self.ac == *value,
        }
    }

    fn as_option(&self) -> MonsterOption {
        MonsterOption {
            uid: self.uid,
            name: self.name.clone(),
        }
    }
}

/// Six monsters with deliberate attribute overlaps so hint filters narrow
/// the candidate list in predictable steps. Three share crVal 3.0; only
/// uid 7 combines crVal 3.0 with "chaotic evil".
pub fn sample_catalog() -> Vec<Monster> {
    vec![
        Monster {
            uid: 1,
            name: "Goblin".to_string(),
            cr_val: 0.25,
            hp: 7,
            speed: 30,
            size_val: "Small".to_string(),
            alignment: "neutral evil".to_string(),
            kind: "humanoid".to_string(),
            ac: 15,
            image_source: "img/goblin.png".to_string(),
        },
        Monster {
            uid: 2,
            name: "Orc".to_string(),
            cr_val: 0.5,
            hp: 15,
            speed: 30,
            size_val: "Medium".to_string(),
            alignment: "chaotic evil".to_string(),
            kind: "humanoid".to_string(),
            ac: 13,
            image_source: "img/orc.png".to_string(),
        },
        Monster {
            uid: 3,
            name: "Dire Wolf".to_string(),
            cr_val: 1.0,
            hp: 37,
            speed: 50,
            size_val: "Large".to_string(),
            alignment: "unaligned".to_string(),
            kind: "beast".to_string(),
            ac: 14,
            image_source: "img/dire_wolf.png".to_string(),
        },
        Monster {
            uid: 5,
            name: "Basilisk".to_string(),
            cr_val: 3.0,
            hp: 52,
            speed: 20,
            size_val: "Medium".to_string(),
            alignment: "unaligned".to_string(),
            kind: "monstrosity".to_string(),
            ac: 15,
            image_source: "img/basilisk.png".to_string(),
        },
        Monster {
            uid: 6,
            name: "Manticore".to_string(),
            cr_val: 3.0,
            hp: 68,
            speed: 30,
            size_val: "Large".to_string(),
            alignment: "lawful evil".to_string(),
            kind: "monstrosity".to_string(),
            ac: 14,
            image_source: "img/manticore.png".to_string(),
        },
        Monster {
            uid: 7,
            name: "Young Dragon".to_string(),
            cr_val: 3.0,
            hp: 52,
            speed: 40,
            size_val: "Large".to_string(),
            alignment: "chaotic evil".to_string(),
            kind: "dragon".to_string(),
            ac: 15,
            image_source: "img/monsters/young_dragon.png".to_string(),
        },
    ]
}

/// In-memory quiz store double.
///
/// `fail_next_matching` makes the next candidate query fail once, to
/// exercise what happens when a guess is appended but the follow-up
/// narrowing query does not come back.
#[derive(Default)]
pub struct MemoryQuizStore {
    monsters: Mutex<Vec<Monster>>,
    quizzes: Mutex<HashMap<NaiveDate, i64>>,
    guesses: Mutex<Vec<GuessRecord>>,
    pub fail_next_matching: AtomicBool,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Vec<Monster>) -> Self {
        let store = Self::new();
        *store.monsters.lock().unwrap() = catalog;
        store
    }

    pub fn schedule_quiz(&self, date: NaiveDate, monster_uid: i64) {
        self.quizzes.lock().unwrap().insert(date, monster_uid);
    }

    /// Everything appended so far, in insertion order.
    pub fn guess_rows(&self) -> Vec<GuessRecord> {
        self.guesses.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn quiz_for_date(&self, date: NaiveDate) -> Result<Option<DailyQuiz>, AppError> {
        let Some(monster_uid) = self.quizzes.lock().unwrap().get(&date).copied() else {
            return Ok(None);
        };

        let monsters = self.monsters.lock().unwrap();
        let monster = monsters
            .iter()
            .find(|monster| monster.uid == monster_uid)
            .ok_or_else(|| AppError::Store("quiz references unknown monster".to_string()))?;

        Ok(Some(DailyQuiz {
            quiz_date: date,
            monster_uid,
            cr_val: monster.cr_val,
            hp: monster.hp,
            speed: monster.speed,
            size_val: monster.size_val.clone(),
            alignment: monster.alignment.clone(),
            kind: monster.kind.clone(),
            ac: monster.ac,
            image_source: monster.image_source.clone(),
        }))
    }

    async fn monster_catalog(&self) -> Result<Vec<MonsterOption>, AppError> {
        Ok(self
            .monsters
            .lock()
            .unwrap()
            .iter()
            .map(Monster::as_option)
            .collect())
    }

    async fn monsters_matching(
        &self,
        filters: &[CandidateFilter],
    ) -> Result<Vec<MonsterOption>, AppError> {
        if self.fail_next_matching.swap(false, Ordering::SeqCst) {
            return Err(AppError::Store("injected store failure".to_string()));
        }

        Ok(self
            .monsters
            .lock()
            .unwrap()
            .iter()
            .filter(|monster| filters.iter().all(|filter| monster.survives(filter)))
            .map(Monster::as_option)
            .collect())
    }

    async fn monster_exists(&self, uid: i64) -> Result<bool, AppError> {
        Ok(self
            .monsters
            .lock()
            .unwrap()
            .iter()
            .any(|monster| monster.uid == uid))
    }

    async fn append_guess(&self, guess: &GuessRecord) -> Result<(), AppError> {
        self.guesses.lock().unwrap().push(guess.clone());
        Ok(())
    }

    async fn guesses_for(
        &self,
        user_uid: &str,
        date: NaiveDate,
    ) -> Result<Vec<GuessRecord>, AppError> {
        let mut rows: Vec<GuessRecord> = self
            .guesses
            .lock()
            .unwrap()
            .iter()
            .filter(|guess| guess.user_uid == user_uid && guess.quiz_date == date)
            .cloned()
            .collect();
        rows.sort_by_key(|guess| guess.guess_num);
        Ok(rows)
    }

    async fn has_winning_guess(
        &self,
        user_uid: &str,
        date: NaiveDate,
        monster_uid: i64,
    ) -> Result<bool, AppError> {
        Ok(self.guesses.lock().unwrap().iter().any(|guess| {
            guess.user_uid == user_uid
                && guess.quiz_date == date
                && guess.exact_guess_uid == Some(monster_uid)
        }))
    }
}

/// In-memory asset store double keyed by (bucket, filename).
#[derive(Default)]
pub struct MemoryAssetStore {
    files: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, bucket: &str, filename: &str, bytes: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert((bucket.to_string(), filename.to_string()), bytes.to_vec());
    }

    /// Seeds `filename` into every reveal-stage bucket, with each bucket's
    /// own name as the file bytes so tests can tell which variant was
    /// served.
    pub fn put_all_stages(&self, filename: &str) {
        for stage in 2..=7 {
            let bucket = format!("blurred_images_{stage}");
            self.put(&bucket, filename, bucket.as_bytes());
        }
        self.put("original_images", filename, b"original_images");
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn exists(&self, bucket: &str, filename: &str) -> bool {
        self.files
            .lock()
            .unwrap()
            .contains_key(&(bucket.to_string(), filename.to_string()))
    }

    async fn read(&self, bucket: &str, filename: &str) -> Result<Vec<u8>, AppError> {
        self.files
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), filename.to_string()))
            .cloned()
            .ok_or_else(|| AppError::Store("asset bytes missing".to_string()))
    }
}
