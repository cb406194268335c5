use shared::models::genre::Genre;

/// Read-only access to the genre vocabulary
pub trait GenreRepository: Send + Sync {
    fn find_all(&self) -> Vec<Genre>;
    fn find_by_id(&self, id: u32) -> Option<Genre>;
    fn find_by_name(&self, name: &str) -> Option<Genre>;
}

/// The four genres every catalog starts with
pub fn default_genres() -> Vec<Genre> {
    vec![
        Genre::new(1, "Fighting"),
        Genre::new(2, "Shooter"),
        Genre::new(3, "Adventure"),
        Genre::new(4, "Kids and Family"),
    ]
}

#[derive(Debug, Clone)]
pub struct InMemoryGenreRepository {
    genres: Vec<Genre>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self::with_genres(default_genres())
    }

    pub fn with_genres(genres: Vec<Genre>) -> Self {
        Self { genres }
    }
}

impl Default for InMemoryGenreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GenreRepository for InMemoryGenreRepository {
    fn find_all(&self) -> Vec<Genre> {
        self.genres.clone()
    }

    fn find_by_id(&self, id: u32) -> Option<Genre> {
        self.genres.iter().find(|genre| genre.id == id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Genre> {
        self.genres
            .iter()
            .find(|genre| genre.matches_name(name))
            .cloned()
    }
}
