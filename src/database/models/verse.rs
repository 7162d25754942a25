use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the externally maintained `verse` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Verse {
    pub edition_name: String,
    pub chapter: i32,
    pub verse: i32,
    pub text: String,
}

impl Verse {
    pub fn new(edition_name: impl Into<String>, chapter: i32, verse: i32, text: impl Into<String>) -> Self {
        Self {
            edition_name: edition_name.into(),
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// All verses of one chapter in one edition, ordered by verse number.
    pub async fn find_by_chapter(
        pool: &sqlx::PgPool,
        edition_name: &str,
        chapter: i32,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Verse>(
            "SELECT edition_name, chapter, verse, text FROM verse WHERE edition_name = $1 AND chapter = $2 ORDER BY verse ASC"
        )
        .bind(edition_name)
        .bind(chapter)
        .fetch_all(pool)
        .await
    }
}
