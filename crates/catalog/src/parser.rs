//! Parsing for user-typed genre tags and titles.
//!
//! Genre tags arrive as free text from the registration form
//! ("Sci-Fi, Action"), so parsing is forgiving about case, spacing and
//! punctuation but strict about the genre actually existing.

use crate::error::{CatalogError, Result};
use crate::types::Genre;
use std::str::FromStr;

/// Lowercase and drop everything that isn't a letter or digit.
///
/// "Sci-Fi", "sci fi" and "SCIFI" all fold to "scifi".
fn fold_genre_tag(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Genre {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match fold_genre_tag(s).as_str() {
            "action" => Ok(Genre::Action),
            "adventure" => Ok(Genre::Adventure),
            "animation" => Ok(Genre::Animation),
            "children" | "childrens" => Ok(Genre::Children),
            "comedy" => Ok(Genre::Comedy),
            "crime" => Ok(Genre::Crime),
            "documentary" => Ok(Genre::Documentary),
            "drama" => Ok(Genre::Drama),
            "fantasy" => Ok(Genre::Fantasy),
            "filmnoir" | "noir" => Ok(Genre::FilmNoir),
            "horror" => Ok(Genre::Horror),
            "musical" => Ok(Genre::Musical),
            "mystery" => Ok(Genre::Mystery),
            "romance" => Ok(Genre::Romance),
            "scifi" | "sciencefiction" => Ok(Genre::SciFi),
            "thriller" => Ok(Genre::Thriller),
            "war" => Ok(Genre::War),
            "western" => Ok(Genre::Western),
            _ => Err(CatalogError::UnknownGenre {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Parse a single genre tag
///
/// Example: "Sci-Fi" -> Ok(Genre::SciFi)
pub fn parse_genre(s: &str) -> Result<Genre> {
    s.parse()
}

/// Parse a comma-separated genre list.
///
/// Blank entries are skipped and repeats collapse to their first occurrence,
/// so "Drama, , drama, Crime" -> [Drama, Crime].
pub fn parse_genre_list(s: &str) -> Result<Vec<Genre>> {
    let mut genres = Vec::new();
    for tag in s.split(',') {
        if tag.trim().is_empty() {
            continue;
        }
        let genre = parse_genre(tag)?;
        if !genres.contains(&genre) {
            genres.push(genre);
        }
    }
    Ok(genres)
}

/// Key used for title lookups: trimmed and lowercased
pub(crate) fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}
