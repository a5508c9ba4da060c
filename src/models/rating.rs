use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single user's rating of a movie
///
/// Ratings are constrained to [1, 5] by the input data, which is what makes
/// 0.0 usable as the "unrated" sentinel in the user-item matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    pub value: f64,
}

impl Rating {
    pub fn new(user_id: u32, movie_id: u32, value: f64) -> Self {
        Self {
            user_id,
            movie_id,
            value,
        }
    }

    /// Parses a `::`-delimited ratings record
    ///
    /// Accepts `user_id::movie_id::rating::timestamp` or the same without the
    /// trailing timestamp; the timestamp is ignored either way. `line` is the
    /// 1-based position of the record in its source, used for error reporting.
    pub fn parse_record(record: &str, line: usize) -> EngineResult<Self> {
        let fields: Vec<&str> = record.split("::").collect();
        if fields.len() != 3 && fields.len() != 4 {
            return Err(EngineError::parse(
                line,
                format!("expected 3 or 4 fields, got {}: {record:?}", fields.len()),
            ));
        }

        let user_id = fields[0]
            .trim()
            .parse::<u32>()
            .map_err(|e| EngineError::parse(line, format!("bad user id {:?}: {e}", fields[0])))?;
        let movie_id = fields[1]
            .trim()
            .parse::<u32>()
            .map_err(|e| EngineError::parse(line, format!("bad movie id {:?}: {e}", fields[1])))?;
        let value = fields[2]
            .trim()
            .parse::<f64>()
            .map_err(|e| EngineError::parse(line, format!("bad rating {:?}: {e}", fields[2])))?;

        Ok(Self::new(user_id, movie_id, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_field_record() {
        let rating = Rating::parse_record("6040::1089::4::956704996", 1).unwrap();
        assert_eq!(rating.user_id, 6040);
        assert_eq!(rating.movie_id, 1089);
        assert_eq!(rating.value, 4.0);
    }

    #[test]
    fn test_parse_three_field_record() {
        let rating = Rating::parse_record("1::10::5", 1).unwrap();
        assert_eq!(rating.user_id, 1);
        assert_eq!(rating.movie_id, 10);
        assert_eq!(rating.value, 5.0);
    }

    #[test]
    fn test_parse_fractional_rating() {
        let rating = Rating::parse_record("2::30::4.5::0", 1).unwrap();
        assert_eq!(rating.value, 4.5);
    }

    #[test]
    fn test_parse_wrong_arity() {
        let err = Rating::parse_record("1::10", 7).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 7, .. }));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_parse_non_numeric_user() {
        let err = Rating::parse_record("alice::10::5::0", 3).unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 3, .. }));
    }
}
