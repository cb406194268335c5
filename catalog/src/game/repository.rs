use chrono::NaiveDate;
use shared::error::{CatalogError, Result};
use shared::models::price::Price;

/// Stored form of a game. The genre is kept by id; list and form views
/// are derived from it at the catalog boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub id: u32,
    pub name: String,
    pub genre_id: u32,
    pub price: Price,
    pub release_date: NaiveDate,
}

/// A game that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub name: String,
    pub genre_id: u32,
    pub price: Price,
    pub release_date: NaiveDate,
}

impl NewGame {
    fn into_record(self, id: u32) -> GameRecord {
        GameRecord {
            id,
            name: self.name,
            genre_id: self.genre_id,
            price: self.price,
            release_date: self.release_date,
        }
    }
}

pub trait GameRepository: Send + Sync {
    fn find_by_id(&self, id: u32) -> Option<GameRecord>;
    fn find_all(&self) -> Vec<GameRecord>;
    fn create(&mut self, game: NewGame) -> Result<GameRecord>;
    fn update(&mut self, game: GameRecord) -> Result<GameRecord>;
    fn delete(&mut self, id: u32) -> Result<()>;
    fn count(&self) -> usize;
}

/// Ordered in-memory store.
///
/// Ids come from a counter that only moves forward, so an id freed by a
/// delete is never handed out again. The last id handed out is
/// `u32::MAX - 1`; after that `create` fails.
#[derive(Debug, Clone)]
pub struct InMemoryGameRepository {
    games: Vec<GameRecord>,
    next_id: u32,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.games.iter().position(|game| game.id == id)
    }
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn find_by_id(&self, id: u32) -> Option<GameRecord> {
        self.games.iter().find(|game| game.id == id).cloned()
    }

    fn find_all(&self) -> Vec<GameRecord> {
        self.games.clone()
    }

    fn create(&mut self, game: NewGame) -> Result<GameRecord> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(CatalogError::IdsExhausted)?;
        let record = game.into_record(id);
        self.games.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, game: GameRecord) -> Result<GameRecord> {
        let index = self.position(game.id).ok_or(CatalogError::NotFound(game.id))?;
        self.games[index] = game.clone();
        Ok(game)
    }

    fn delete(&mut self, id: u32) -> Result<()> {
        let index = self.position(id).ok_or(CatalogError::NotFound(id))?;
        self.games.remove(index);
        Ok(())
    }

    fn count(&self) -> usize {
        self.games.len()
    }
}
