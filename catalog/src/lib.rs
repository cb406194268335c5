//! In-memory game and genre catalogs backing the store's list and edit views.

pub mod config;
pub mod genre {
    pub mod catalog;
    pub mod repository;

    pub use catalog::GenreCatalog;
    pub use repository::{GenreRepository, InMemoryGenreRepository};
}

pub mod game {
    pub mod catalog;
    pub mod repository;

    pub use catalog::GameCatalog;
    pub use repository::{GameRecord, GameRepository, InMemoryGameRepository, NewGame};
}

pub use config::{CatalogConfig, Environment};
pub use game::GameCatalog;
pub use genre::GenreCatalog;
