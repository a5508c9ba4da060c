use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A movie from the catalog, with its pipe-delimited genre tags split out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: u32,
    pub title: String,
    pub genres: Vec<String>,
}

impl Movie {
    pub fn new(movie_id: u32, title: impl Into<String>, genres: Vec<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genres,
        }
    }

    /// Parses a `::`-delimited movies record: `movie_id::title::genre1|genre2`
    ///
    /// An empty genre field yields an empty genre list. `line` is the 1-based
    /// position of the record in its source, used for error reporting.
    pub fn parse_record(record: &str, line: usize) -> EngineResult<Self> {
        let fields: Vec<&str> = record.split("::").collect();
        if fields.len() != 3 {
            return Err(EngineError::parse(
                line,
                format!("expected 3 fields, got {}: {record:?}", fields.len()),
            ));
        }

        let movie_id = fields[0]
            .trim()
            .parse::<u32>()
            .map_err(|e| EngineError::parse(line, format!("bad movie id {:?}: {e}", fields[0])))?;

        let genres = if fields[2].trim().is_empty() {
            Vec::new()
        } else {
            fields[2].trim().split('|').map(str::to_string).collect()
        };

        Ok(Self::new(movie_id, fields[1].to_string(), genres))
    }

    /// The raw pipe-delimited genre string, e.g. `"Comedy|Romance"`
    ///
    /// Used for display, genre-key sorting, and substring genre filtering.
    pub fn genre_string(&self) -> String {
        self.genres.join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let movie = Movie::parse_record("3885::Love & Sex (2000)::Comedy|Romance", 1).unwrap();
        assert_eq!(movie.movie_id, 3885);
        assert_eq!(movie.title, "Love & Sex (2000)");
        assert_eq!(movie.genres, vec!["Comedy", "Romance"]);
    }

    #[test]
    fn test_parse_single_genre() {
        let movie = Movie::parse_record("10::A::Drama", 1).unwrap();
        assert_eq!(movie.genres, vec!["Drama"]);
    }

    #[test]
    fn test_parse_empty_genre_field() {
        let movie = Movie::parse_record("10::Untagged::", 1).unwrap();
        assert!(movie.genres.is_empty());
        assert_eq!(movie.genre_string(), "");
    }

    #[test]
    fn test_parse_wrong_arity() {
        let err = Movie::parse_record("10::No Genres Field", 5).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 5, .. }));
    }

    #[test]
    fn test_genre_string_round_trip() {
        let movie = Movie::parse_record("30::C::Drama|Action", 1).unwrap();
        assert_eq!(movie.genre_string(), "Drama|Action");
    }
}
