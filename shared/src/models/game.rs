use crate::models::price::Price;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A game as shown in list views, with its genre by name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Game's ID
    pub id: u32,

    /// Game's name
    pub name: String,

    /// Display name of the game's genre
    pub genre: String,

    /// Game's price
    pub price: Price,

    /// Date the game was released
    pub release_date: NaiveDate,
}
