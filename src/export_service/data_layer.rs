use std::path::Path;

use async_trait::async_trait;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, SqlitePool};

#[cfg(test)]
use mockall::automock;
use tokio_stream::StreamExt;

use super::models::HighlightRecord;
use crate::data_layer_error::*;

// No ORDER BY: the order rows come back in decides per-book numbering
const HIGHLIGHTS_QUERY: &str = "
    SELECT
        Bookmark.VolumeID AS volume_id,
        Bookmark.Text AS text,
        Bookmark.Type AS annotation_type,
        Bookmark.Annotation AS annotation_note,
        Bookmark.DateCreated AS date_created,
        content.BookTitle AS book_title,
        content.Title AS title,
        content.Attribution AS author
    FROM Bookmark
    INNER JOIN content ON Bookmark.VolumeID = content.ContentID
";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait HighlightSource : Send + Sync {
    ///
    /// Gets every annotation joined with its book's metadata, in the order the source returns them
    ///
    async fn get_highlights(&self) -> Result<Vec<HighlightRecord>>;
}

///
/// Opens the e-reader database at `db_path` without write access
///
pub async fn open_read_only(db_path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    Ok(SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options).await?)
}

pub struct DbHighlightSource<'a> {
    db: &'a SqlitePool,
}

impl<'a> DbHighlightSource<'a> {
    pub fn new(db: &'a SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> HighlightSource for DbHighlightSource<'a> {
    async fn get_highlights(&self) -> Result<Vec<HighlightRecord>> {
        let mut rows = sqlx::query_as::<_, HighlightRecord>(HIGHLIGHTS_QUERY).fetch(self.db);

        let mut highlights = Vec::new();
        while let Some(row) = rows.next().await {
            highlights.push(row?);
        }

        Ok(highlights)
    }
}
