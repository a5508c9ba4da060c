use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Movie, Rating};

/// In-memory store of raw ratings and the movie catalog
///
/// Populated once from record collections or `.dat` files and immutable
/// afterwards; a reload replaces the store wholesale.
#[derive(Debug, Default, Clone)]
pub struct RatingStore {
    ratings: Vec<Rating>,
    movies: Vec<Movie>,
    movie_index: HashMap<u32, usize>,
}

impl RatingStore {
    pub fn new(ratings: Vec<Rating>, movies: Vec<Movie>) -> Self {
        let movie_index = movies
            .iter()
            .enumerate()
            .map(|(i, m)| (m.movie_id, i))
            .collect();
        Self {
            ratings,
            movies,
            movie_index,
        }
    }

    /// Builds a store from `::`-delimited record lines
    ///
    /// Blank lines are skipped; a malformed record fails the whole load with
    /// a parse error naming its 1-based line.
    pub fn from_records<'a, R, M>(rating_lines: R, movie_lines: M) -> EngineResult<Self>
    where
        R: IntoIterator<Item = &'a str>,
        M: IntoIterator<Item = &'a str>,
    {
        let ratings = parse_lines(rating_lines, Rating::parse_record)?;
        let movies = parse_lines(movie_lines, Movie::parse_record)?;
        tracing::info!(
            rating_count = ratings.len(),
            movie_count = movies.len(),
            "Loaded rating store"
        );
        Ok(Self::new(ratings, movies))
    }

    /// Builds a store from `ratings.dat` / `movies.dat` style files
    ///
    /// The MovieLens-era `.dat` files are ISO-8859-1 encoded, so the bytes are
    /// decoded as Latin-1 rather than UTF-8. A missing or unreadable file
    /// fails with `DataNotFound` naming the path.
    pub fn from_files(
        ratings_path: impl AsRef<Path>,
        movies_path: impl AsRef<Path>,
    ) -> EngineResult<Self> {
        let ratings_text = read_latin1(ratings_path.as_ref())?;
        let movies_text = read_latin1(movies_path.as_ref())?;
        Self::from_records(ratings_text.lines(), movies_text.lines())
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Looks up a movie by id
    pub fn movie(&self, movie_id: u32) -> Option<&Movie> {
        self.movie_index.get(&movie_id).map(|&i| &self.movies[i])
    }
}

fn parse_lines<'a, I, T>(
    lines: I,
    parse: impl Fn(&str, usize) -> EngineResult<T>,
) -> EngineResult<Vec<T>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse(line, i + 1))
        .collect()
}

fn read_latin1(path: &Path) -> EngineResult<String> {
    let bytes = fs::read(path)
        .map_err(|e| EngineError::DataNotFound(format!("{}: {e}", path.display())))?;
    // Latin-1 maps each byte directly to the code point of the same value.
    Ok(bytes.iter().map(|&b| b as char).collect())
}
