use super::models::HighlightRecord;

///
/// A single rendered highlight, ready to be written under its book's directory
///
#[derive(Debug, PartialEq)]
pub struct ExportedDocument {
    pub book_dir: String,
    pub index: usize,
    pub content: String,
}

impl ExportedDocument {
    ///
    /// Renders `record` as the `index`th highlight of `book_title`.
    /// `book_dir` is the filesystem-safe form of the title used for the directory and filename.
    ///
    pub fn render(record: &HighlightRecord, book_title: &str, book_dir: &str, index: usize) -> Self {
        let author = record.author.as_deref().unwrap_or_default();
        let date_created = record.date_created.as_deref().unwrap_or_default();
        let text = record.text.as_deref().unwrap_or_default();
        // Plain highlights are already covered by the `highlight` tag
        let annotation_type = match record.annotation_type.as_deref() {
            Some("highlight") | None => "",
            Some(other) => other,
        };

        let content = format!(
"---
title: \"{book_title}\"
author: \"{author}\"
date_created: \"{date_created}\"
tags: [book-quote, highlight, {annotation_type}]
---
## Reference Text
> {text}
-  {author}, [[{book_title}]]
");

        Self { book_dir: book_dir.to_string(), index, content }
    }

    pub fn file_name(&self) -> String {
        format!("{} Highlight {}.md", self.book_dir, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_highlight() -> HighlightRecord {
        HighlightRecord {
            volume_id: "_volume_".to_string(),
            text: Some("_highlight_".to_string()),
            annotation_type: Some("highlight".to_string()),
            annotation_note: None,
            date_created: Some("2025-01-01T12:00:00".to_string()),
            book_title: Some("Test Book".to_string()),
            title: Some("Test Book".to_string()),
            author: Some("Test Author".to_string()),
        }
    }

    #[test]
    fn test_render_highlight() {
        let doc = ExportedDocument::render(&sample_highlight(), "Test Book", "Test Book", 1);

        assert_eq!(doc.file_name(), "Test Book Highlight 1.md");
        assert_eq!(doc.content, "\
---
title: \"Test Book\"
author: \"Test Author\"
date_created: \"2025-01-01T12:00:00\"
tags: [book-quote, highlight, ]
---
## Reference Text
> _highlight_
-  Test Author, [[Test Book]]
");
    }

    #[test]
    fn test_render_note_is_tagged() {
        let record = HighlightRecord {
            annotation_type: Some("note".to_string()),
            annotation_note: Some("my thoughts".to_string()),
            ..sample_highlight()
        };
        let doc = ExportedDocument::render(&record, "Test Book", "Test Book", 3);

        assert!(doc.content.contains("tags: [book-quote, highlight, note]\n"));
        assert_eq!(doc.file_name(), "Test Book Highlight 3.md");
    }

    #[test]
    fn test_render_missing_columns_are_empty() {
        let record = HighlightRecord { volume_id: "v".to_string(), ..Default::default() };
        let doc = ExportedDocument::render(&record, "Unknown Title", "Unknown Title", 1);

        assert!(doc.content.contains("author: \"\"\n"));
        assert!(doc.content.contains("date_created: \"\"\n"));
        assert!(doc.content.contains("tags: [book-quote, highlight, ]\n"));
        assert!(doc.content.contains("> \n-  , [[Unknown Title]]\n"));
    }

    #[test]
    fn test_document_body_keeps_unsanitized_title() {
        let doc = ExportedDocument::render(&sample_highlight(), "Why? Because", "Why Because", 2);

        assert!(doc.content.contains("title: \"Why? Because\"\n"));
        assert!(doc.content.contains("[[Why? Because]]"));
        assert_eq!(doc.file_name(), "Why Because Highlight 2.md");
    }
}
