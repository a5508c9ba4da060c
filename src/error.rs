/// Engine-level errors
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Data not found: {0}")]
    DataNotFound(String),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown user: {0}")]
    UnknownUser(u32),

    #[error("Similarity matrix not computed; call compute_similarity first")]
    SimilarityNotComputed,
}

impl EngineError {
    /// Builds a parse error for the given 1-based input line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        EngineError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
