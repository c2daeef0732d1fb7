//! The movie catalog: a read-only record set loaded once at startup.
//!
//! The default catalog is a JSON document embedded via `include_str!`, so the
//! binary works with no runtime file I/O. A different catalog can be supplied
//! with `--catalog <path>`. A catalog that parses but contains a record with
//! an empty title is rejected whole: titles are the match key, and a record
//! without one could never be found or selected.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

/// A single movie entry. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
  pub title: String,
  pub year: u16,
  /// Display-formatted duration, e.g. "2h 16min".
  pub running_time: String,
  pub description: String,
  /// Path or URI of the poster image. Shown as a reference, never fetched.
  pub poster: String,
  /// Genre labels in display order. May be empty.
  pub genre: Vec<String>,
}

#[derive(Debug)]
pub struct Catalog {
  movies: Vec<MovieRecord>,
}

impl Catalog {
  /// Parse a catalog from a JSON array of movie records.
  pub fn from_json(json: &str) -> Result<Self> {
    let movies: Vec<MovieRecord> = serde_json::from_str(json).context("catalog is not a valid JSON array of movies")?;
    for (i, movie) in movies.iter().enumerate() {
      if movie.title.trim().is_empty() {
        bail!("catalog record {} has an empty title", i);
      }
    }
    Ok(Self { movies })
  }

  /// The catalog embedded in the binary at compile time.
  pub fn embedded() -> Result<Self> {
    Self::from_json(include_str!("../movies.json")).context("embedded movies.json is malformed")
  }

  /// Load a catalog from a JSON file on disk.
  pub fn load(path: &Path) -> Result<Self> {
    let content =
      std::fs::read_to_string(path).with_context(|| format!("failed to read catalog file {}", path.display()))?;
    Self::from_json(&content).with_context(|| format!("failed to parse catalog file {}", path.display()))
  }

  pub fn movies(&self) -> &[MovieRecord] {
    &self.movies
  }

  pub fn get(&self, idx: usize) -> Option<&MovieRecord> {
    self.movies.get(idx)
  }

  pub fn len(&self) -> usize {
    self.movies.len()
  }

  pub fn is_empty(&self) -> bool {
    self.movies.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // --- from_json ---

  #[test]
  fn from_json_valid_records() {
    let catalog = Catalog::from_json(
      r#"[{
        "title": "Inception",
        "year": 2010,
        "runningTime": "2h 28min",
        "description": "Dreams within dreams.",
        "poster": "assets/posters/inception.jpg",
        "genre": ["Action", "Sci-Fi"]
      }]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 1);
    let movie = catalog.get(0).unwrap();
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.year, 2010);
    assert_eq!(movie.running_time, "2h 28min");
    assert_eq!(movie.genre, vec!["Action", "Sci-Fi"]);
  }

  #[test]
  fn from_json_empty_array() {
    let catalog = Catalog::from_json("[]").unwrap();
    assert!(catalog.is_empty());
  }

  #[test]
  fn from_json_empty_genre_is_valid() {
    let catalog = Catalog::from_json(
      r#"[{
        "title": "Whiplash",
        "year": 2014,
        "runningTime": "1h 46min",
        "description": "Not quite my tempo.",
        "poster": "assets/posters/whiplash.jpg",
        "genre": []
      }]"#,
    )
    .unwrap();
    assert!(catalog.get(0).unwrap().genre.is_empty());
  }

  #[test]
  fn from_json_missing_field_is_rejected() {
    // No runningTime: the whole catalog is rejected, not just the record.
    let result = Catalog::from_json(
      r#"[{
        "title": "Inception",
        "year": 2010,
        "description": "Dreams within dreams.",
        "poster": "assets/posters/inception.jpg",
        "genre": []
      }]"#,
    );
    assert!(result.is_err());
  }

  #[test]
  fn from_json_empty_title_is_rejected() {
    let result = Catalog::from_json(
      r#"[{
        "title": "  ",
        "year": 2010,
        "runningTime": "2h 28min",
        "description": "Untitled.",
        "poster": "assets/posters/unknown.jpg",
        "genre": []
      }]"#,
    );
    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("empty title"), "unexpected error: {err}");
  }

  #[test]
  fn from_json_not_an_array_is_rejected() {
    assert!(Catalog::from_json(r#"{"title": "Inception"}"#).is_err());
  }

  // --- embedded ---

  #[test]
  fn embedded_catalog_parses() {
    let catalog = Catalog::embedded().unwrap();
    assert!(!catalog.is_empty());
    assert!(catalog.movies().iter().any(|m| m.title == "The Matrix"));
  }
}
