//! Topic table: CSV loading and uniform random selection.
//!
//! The topic table is the only input the pipeline reads from disk — a CSV
//! with `topic` and `url` headers, one guideline document per row. No
//! filtering, deduplication, or weighting is applied: a run draws exactly
//! one row with uniform probability.

use crate::error::OncopostError;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One row of the topic table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Topic {
    /// Human-readable subject, e.g. "Breast Cancer".
    pub topic: String,
    /// URL of the reference guideline PDF.
    pub url: String,
}

/// Load every row of the topic table at `path`.
///
/// # Errors
/// * [`OncopostError::TopicsFileNotFound`] — the file does not exist
/// * [`OncopostError::CsvParse`] — the file exists but a row is malformed
pub fn load_topics(path: &Path) -> Result<Vec<Topic>, OncopostError> {
    if !path.exists() {
        return Err(OncopostError::TopicsFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| OncopostError::CsvParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut topics = Vec::new();
    for row in reader.deserialize() {
        let topic: Topic = row.map_err(|e| OncopostError::CsvParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        topics.push(topic);
    }

    debug!("Loaded {} topics from {}", topics.len(), path.display());
    Ok(topics)
}

/// Pick one topic uniformly at random.
///
/// # Errors
/// [`OncopostError::NoTopics`] if the slice is empty.
pub fn pick_random(topics: &[Topic]) -> Result<&Topic, OncopostError> {
    let mut rng = rand::rng();
    topics.choose(&mut rng).ok_or(OncopostError::NoTopics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_parses_headers_and_rows() {
        let file = write_csv(
            "topic,url\n\
             Breast Cancer,https://example.org/breast.pdf\n\
             Melanoma,https://example.org/melanoma.pdf\n",
        );
        let topics = load_topics(file.path()).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].topic, "Breast Cancer");
        assert_eq!(topics[1].url, "https://example.org/melanoma.pdf");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let err = load_topics(Path::new("/nonexistent/links.csv")).unwrap_err();
        assert!(matches!(err, OncopostError::TopicsFileNotFound { .. }));
    }

    #[test]
    fn load_rejects_row_missing_url_column() {
        let file = write_csv("topic,url\nBreast Cancer\n");
        let err = load_topics(file.path()).unwrap_err();
        assert!(matches!(err, OncopostError::CsvParse { .. }));
    }

    #[test]
    fn pick_returns_member_of_table() {
        let topics: Vec<Topic> = (0..20)
            .map(|i| Topic {
                topic: format!("topic-{i}"),
                url: format!("https://example.org/{i}.pdf"),
            })
            .collect();

        // Draw repeatedly; every draw must be a row from the table.
        for _ in 0..100 {
            let picked = pick_random(&topics).unwrap();
            assert!(topics.contains(picked));
        }
    }

    #[test]
    fn pick_from_empty_table_fails() {
        let err = pick_random(&[]).unwrap_err();
        assert!(matches!(err, OncopostError::NoTopics));
    }

    #[test]
    fn pick_single_row_always_selects_it() {
        let topics = vec![Topic {
            topic: "Breast Cancer".into(),
            url: "http://x/doc.pdf".into(),
        }];
        assert_eq!(pick_random(&topics).unwrap(), &topics[0]);
    }
}
