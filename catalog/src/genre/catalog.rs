use crate::genre::repository::{GenreRepository, InMemoryGenreRepository};
use shared::dto::genre::GenreOption;
use shared::error::{CatalogError, Result};
use shared::models::genre::Genre;

/// The fixed genre vocabulary used by game forms and list views.
///
/// Genres are seeded once and never change, so every lookup against a
/// given catalog returns the same answer for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct GenreCatalog<R: GenreRepository = InMemoryGenreRepository> {
    repo: R,
}

impl GenreCatalog {
    pub fn new() -> Self {
        Self::with_repository(InMemoryGenreRepository::new())
    }
}

impl<R: GenreRepository> GenreCatalog<R> {
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// All genres in seed order.
    pub fn get_genres(&self) -> Vec<Genre> {
        self.repo.find_all()
    }

    pub fn find_by_id(&self, id: u32) -> Option<Genre> {
        self.repo.find_by_id(id)
    }

    /// Case-insensitive exact match on the genre name.
    pub fn find_by_name(&self, name: &str) -> Option<Genre> {
        self.repo.find_by_name(name)
    }

    /// Entries for a genre select control: the id is the value, the name the label.
    pub fn genre_options(&self) -> Vec<GenreOption> {
        self.get_genres().iter().map(GenreOption::from).collect()
    }

    /// Resolves a genre id as submitted by an edit form.
    ///
    /// A missing or blank id is an invalid argument. An id that is not a
    /// number, or names no genre, is a lookup failure.
    pub fn resolve_genre_id(&self, genre_id: Option<&str>) -> Result<Genre> {
        let raw = match genre_id {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                return Err(CatalogError::InvalidArgument(
                    "Genre id is required".to_string(),
                ))
            }
        };

        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| self.repo.find_by_id(id))
            .ok_or_else(|| CatalogError::LookupFailure(format!("No genre with id '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_get_genres_returns_seed() {
        let catalog = GenreCatalog::new();
        let genres = catalog.get_genres();
        assert_eq!(genres.len(), 4);
        assert_eq!(genres[0], Genre::new(1, "Fighting"));
        assert_eq!(genres[3], Genre::new(4, "Kids and Family"));
    }

    #[test]
    fn test_get_genres_is_stable() {
        let catalog = GenreCatalog::new();
        assert_eq!(catalog.get_genres(), catalog.get_genres());
    }

    #[test]
    fn test_genre_options() {
        let options = GenreCatalog::new().genre_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[1].value, "2");
        assert_eq!(options[1].label, "Shooter");
    }

    #[test_case("1", "Fighting" ; "first")]
    #[test_case("4", "Kids and Family" ; "last")]
    #[test_case(" 3 ", "Adventure" ; "padded")]
    fn test_resolve_genre_id(input: &str, expected: &str) {
        let genre = GenreCatalog::new().resolve_genre_id(Some(input)).unwrap();
        assert_eq!(genre.name, expected);
    }

    #[test_case(None ; "missing")]
    #[test_case(Some("") ; "empty")]
    #[test_case(Some(" \t ") ; "whitespace")]
    fn test_resolve_blank_genre_id(input: Option<&str>) {
        let err = GenreCatalog::new().resolve_genre_id(input).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[test_case("0" ; "zero")]
    #[test_case("5" ; "past the end")]
    #[test_case("-1" ; "negative")]
    #[test_case("adventure" ; "not a number")]
    fn test_resolve_unknown_genre_id(input: &str) {
        let err = GenreCatalog::new().resolve_genre_id(Some(input)).unwrap_err();
        assert!(matches!(err, CatalogError::LookupFailure(_)));
    }
}
