// src/models/monster.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

/// Minimal candidate list item sent to the client.
///
/// Projection of the 'monsters' table: the catalog and every filtered
/// candidate query select only these two columns. The wire key for the id
/// stays `UID` for compatibility with the existing frontend.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MonsterOption {
    #[serde(rename = "UID")]
    pub uid: i64,
    pub name: String,
}
