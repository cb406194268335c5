pub mod models {
    pub mod game;
    pub mod genre;
    pub mod price;
}

pub mod dto {
    pub mod game;
    pub mod genre;
}

pub mod error;

// Re-export commonly used items
pub use error::{CatalogError, Result};

// Re-export models
pub use models::{game::GameSummary, genre::Genre, price::Price};

// Re-export DTOs
pub use dto::{game::GameDetails, genre::GenreOption};
