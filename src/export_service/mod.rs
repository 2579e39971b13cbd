pub mod data_layer;
pub mod document;
pub mod error;
pub mod models;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use data_layer::*;
use document::ExportedDocument;
use error::*;

use crate::{collections::Counter, naming::sanitize_title};

///
/// Writes every annotation from a `HighlightSource` as its own Markdown document,
/// grouped into one directory per book and numbered in the order the source returns them.
///
pub struct HighlightExporter<'a> {
    source: &'a dyn HighlightSource,
    output_directory: PathBuf,
}

impl<'a> HighlightExporter<'a> {
    pub fn new(source: &'a dyn HighlightSource, output_directory: PathBuf) -> Self {
        Self { source, output_directory }
    }

    ///
    /// Exports all highlights, overwriting documents left by earlier runs.
    /// Returns the number of documents written.
    ///
    pub async fn export_all(&self) -> Result<usize> {
        tokio::fs::create_dir_all(&self.output_directory).await?;
        let highlights = self.source.get_highlights().await?;
        debug!(count = highlights.len(), "fetched highlights");

        let mut book_counter = Counter::new();
        for highlight in &highlights {
            let book_title = highlight.effective_title();
            let book_dir = sanitize_title(Some(&book_title));
            let index = book_counter.next(book_dir.clone());

            let doc = ExportedDocument::render(highlight, &book_title, &book_dir, index);
            self.write_document(&doc).await?;
        }

        info!(count = highlights.len(), output = %self.output_directory.display(), "export completed");
        Ok(highlights.len())
    }

    async fn write_document(&self, doc: &ExportedDocument) -> Result<()> {
        let book_path = self.output_directory.join(&doc.book_dir);
        tokio::fs::create_dir_all(&book_path).await?;

        let file_path = book_path.join(doc.file_name());
        debug!(path = %file_path.display(), "writing highlight");
        tokio::fs::write(&file_path, doc.content.as_bytes()).await?;
        Ok(())
    }
}

///
/// Opens the database at `db_path` and exports its highlights into `output_directory`
///
pub async fn export_highlights(db_path: &Path, output_directory: &Path) -> Result<usize> {
    let db = open_read_only(db_path).await?;
    let source = DbHighlightSource::new(&db);
    let count = HighlightExporter::new(&source, output_directory.to_path_buf()).export_all().await;
    db.close().await;
    count
}
