//! Extraction result type and its output renderings.
//!
//! A [`ParsedArticle`] is plain data with exactly three fields, each
//! independently optional. It serializes to `{"date", "title", "content"}`
//! with absent fields as `null`.

use serde::{Deserialize, Serialize};

use crate::{LedeError, Result};

/// Output format options for a parsed article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{"date", "title", "content"}` object.
    #[default]
    Json,
    /// Title, date, and body separated by blank lines.
    PlainText,
}

/// The result of extracting an article from an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedArticle {
    /// Publication date, human-readable when it could be parsed.
    pub date: Option<String>,
    /// Trimmed headline.
    pub title: Option<String>,
    /// Body paragraphs joined by a blank line.
    pub content: Option<String>,
}

impl ParsedArticle {
    /// Length of the trimmed body in characters; zero without one.
    pub fn content_len(&self) -> usize {
        self.content.as_deref().map_or(0, |c| c.trim().chars().count())
    }

    /// Converts the article to the specified format.
    pub fn to_format(&self, format: OutputFormat, pretty: bool) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(pretty),
            OutputFormat::PlainText => Ok(self.to_text()),
        }
    }

    /// Serializes the article as a JSON object.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty { serde_json::to_string_pretty(self) } else { serde_json::to_string(self) };
        rendered.map_err(|e| LedeError::InternalError(e.to_string()))
    }

    /// Renders the article for reading in a terminal.
    pub fn to_text(&self) -> String {
        [self.title.as_deref(), self.date.as_deref(), self.content.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedArticle {
        ParsedArticle {
            date: Some("1 марта 2024 г.".to_string()),
            title: Some("Hello".to_string()),
            content: Some("First paragraph.\n\nSecond paragraph.".to_string()),
        }
    }

    #[test]
    fn test_json_has_exactly_three_fields() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json(false).unwrap()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["title"], "Hello");
        assert_eq!(object["date"], "1 марта 2024 г.");
    }

    #[test]
    fn test_json_nulls_for_missing_fields() {
        let article = ParsedArticle { title: Some("Only title".to_string()), ..Default::default() };
        let json = article.to_json(false).unwrap();
        assert_eq!(json, r#"{"date":null,"title":"Only title","content":null}"#);
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let json = sample().to_json(true).unwrap();
        assert!(json.contains('\n'));
        let back: ParsedArticle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_to_text_skips_missing_fields() {
        let article = ParsedArticle { title: Some("T".to_string()), content: Some("Body".to_string()), date: None };
        assert_eq!(article.to_text(), "T\n\nBody");
        assert_eq!(article.to_format(OutputFormat::PlainText, false).unwrap(), "T\n\nBody");
    }

    #[test]
    fn test_content_len_counts_chars() {
        let article = ParsedArticle { content: Some("  привет  ".to_string()), ..Default::default() };
        assert_eq!(article.content_len(), 6);
        assert_eq!(ParsedArticle::default().content_len(), 0);
    }
}
