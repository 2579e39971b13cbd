use crate::naming::{fallback_title, UNKNOWN_TITLE};

///
/// One annotation row joined with the metadata of the book it belongs to
///
#[derive(Clone, Debug, Default, PartialEq, sqlx::FromRow)]
pub struct HighlightRecord {
    pub volume_id: String,
    pub text: Option<String>,
    pub annotation_type: Option<String>,
    pub annotation_note: Option<String>,
    pub date_created: Option<String>,
    pub book_title: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl HighlightRecord {
    ///
    /// The title this record is grouped and exported under: the book-level title when
    /// present, otherwise the per-record title with only its colons rewritten.
    ///
    pub fn effective_title(&self) -> String {
        match (&self.book_title, &self.title) {
            (Some(book_title), _) => book_title.clone(),
            (None, Some(title)) => fallback_title(title),
            (None, None) => UNKNOWN_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_title_prefers_book_title() {
        let record = HighlightRecord {
            book_title: Some("Book: Level".to_string()),
            title: Some("Chapter: One".to_string()),
            ..Default::default()
        };
        assert_eq!(record.effective_title(), "Book: Level");
    }

    #[test]
    fn test_effective_title_falls_back_to_title() {
        let record = HighlightRecord {
            title: Some("Foo: Bar".to_string()),
            ..Default::default()
        };
        assert_eq!(record.effective_title(), "Foo - Bar");
    }

    #[test]
    fn test_effective_title_without_any_title() {
        assert_eq!(HighlightRecord::default().effective_title(), UNKNOWN_TITLE);
    }
}
