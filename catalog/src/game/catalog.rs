use crate::config::CatalogConfig;
use crate::game::repository::{GameRecord, GameRepository, InMemoryGameRepository, NewGame};
use crate::genre::catalog::GenreCatalog;
use crate::genre::repository::{GenreRepository, InMemoryGenreRepository};
use chrono::NaiveDate;
use log::{debug, info, warn};
use shared::dto::game::GameDetails;
use shared::error::{CatalogError, Result};
use shared::models::game::GameSummary;
use shared::models::genre::Genre;
use shared::models::price::Price;
use validator::Validate;

struct SampleGame {
    name: &'static str,
    genre: &'static str,
    price_cents: u64,
    released: (i32, u32, u32),
}

const SAMPLE_GAMES: [SampleGame; 3] = [
    SampleGame {
        name: "Street Fighter II",
        genre: "Fighting",
        price_cents: 1999,
        released: (1991, 2, 1),
    },
    SampleGame {
        name: "Final Fantasy VII",
        genre: "Shooter",
        price_cents: 4999,
        released: (1997, 1, 31),
    },
    SampleGame {
        name: "Mario Kart",
        genre: "Adventure",
        price_cents: 5999,
        released: (1992, 4, 21),
    },
];

/// The mutable game list behind the store's list and edit views.
///
/// Owns its genre vocabulary. Games are stored with a genre id and turned
/// into [`GameSummary`] (genre by name) or [`GameDetails`] (genre id as a
/// string) on the way out.
#[derive(Debug, Clone)]
pub struct GameCatalog<G = InMemoryGameRepository, R = InMemoryGenreRepository>
where
    G: GameRepository,
    R: GenreRepository,
{
    games: G,
    genres: GenreCatalog<R>,
}

impl GameCatalog {
    /// A catalog holding the three sample games.
    pub fn new() -> Result<Self> {
        Self::with_sample_games(true)
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::with_sample_games(config.seed_sample_games)
    }

    pub fn with_sample_games(seed: bool) -> Result<Self> {
        let mut catalog = Self::with_repositories(InMemoryGameRepository::new(), GenreCatalog::new());
        if seed {
            for sample in &SAMPLE_GAMES {
                catalog.seed(sample)?;
            }
            debug!("Seeded {} sample games", catalog.len());
        }
        Ok(catalog)
    }

    fn seed(&mut self, sample: &SampleGame) -> Result<()> {
        let genre = self.genres.find_by_name(sample.genre).ok_or_else(|| {
            CatalogError::LookupInconsistency(format!(
                "Sample game '{}' names unknown genre '{}'",
                sample.name, sample.genre
            ))
        })?;
        let (year, month, day) = sample.released;
        let release_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            CatalogError::InvalidArgument(format!("Invalid release date for '{}'", sample.name))
        })?;

        self.games.create(NewGame {
            name: sample.name.to_string(),
            genre_id: genre.id,
            price: Price::from_cents(sample.price_cents),
            release_date,
        })?;
        Ok(())
    }
}

impl<G: GameRepository, R: GenreRepository> GameCatalog<G, R> {
    fn with_repositories(games: G, genres: GenreCatalog<R>) -> Self {
        Self { games, genres }
    }

    /// The genre vocabulary this catalog resolves against.
    pub fn genres(&self) -> &GenreCatalog<R> {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.games.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every game in insertion order.
    ///
    /// A stored game whose genre no longer resolves is left out and logged;
    /// the add and update paths never store one.
    pub fn get_games(&self) -> Vec<GameSummary> {
        self.games
            .find_all()
            .iter()
            .filter_map(|record| match self.to_summary(record) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!("Skipping game {} in listing: {}", record.id, e);
                    None
                }
            })
            .collect()
    }

    pub fn get_game(&self, id: u32) -> Result<GameDetails> {
        debug!("Fetching game with ID: {}", id);
        let record = self.games.find_by_id(id).ok_or(CatalogError::NotFound(id))?;
        let genre = self.stored_genre(&record)?;

        Ok(GameDetails {
            id: record.id,
            name: record.name,
            genre_id: Some(genre.id.to_string()),
            price: record.price,
            release_date: record.release_date,
        })
    }

    /// Appends a new game and returns the id it was given.
    pub fn add_game(&mut self, details: GameDetails) -> Result<u32> {
        let genre = self.resolve_genre(&details)?;

        let record = self.games.create(NewGame {
            name: details.name,
            genre_id: genre.id,
            price: details.price,
            release_date: details.release_date,
        })?;

        info!("Added game {} '{}' ({})", record.id, record.name, genre.name);
        Ok(record.id)
    }

    /// Overwrites name, genre, price and release date of an existing game.
    pub fn update_game(&mut self, details: GameDetails) -> Result<()> {
        let genre = self.resolve_genre(&details)?;
        let existing = self
            .games
            .find_by_id(details.id)
            .ok_or(CatalogError::NotFound(details.id))?;

        let updated = self.games.update(GameRecord {
            id: existing.id,
            name: details.name,
            genre_id: genre.id,
            price: details.price,
            release_date: details.release_date,
        })?;

        info!("Updated game {} '{}' ({})", updated.id, updated.name, genre.name);
        Ok(())
    }

    pub fn delete_game(&mut self, id: u32) -> Result<()> {
        debug!("Deleting game with ID: {}", id);
        self.games.delete(id)?;
        info!("Deleted game {}", id);
        Ok(())
    }

    fn resolve_genre(&self, details: &GameDetails) -> Result<Genre> {
        details.validate()?;
        self.genres.resolve_genre_id(details.genre_id.as_deref())
    }

    fn stored_genre(&self, record: &GameRecord) -> Result<Genre> {
        self.genres.find_by_id(record.genre_id).ok_or_else(|| {
            CatalogError::LookupInconsistency(format!(
                "Game {} references unknown genre {}",
                record.id, record.genre_id
            ))
        })
    }

    fn to_summary(&self, record: &GameRecord) -> Result<GameSummary> {
        let genre = self.stored_genre(record)?;
        Ok(GameSummary {
            id: record.id,
            name: record.name.clone(),
            genre: genre.name,
            price: record.price,
            release_date: record.release_date,
        })
    }
}
