use crate::models::price::Price;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Edit-form view of a game, with its genre by id
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameDetails {
    /// Game's ID (ignored when adding, the catalog assigns one)
    #[serde(default)]
    pub id: u32,

    /// Game's name
    pub name: String,

    /// String form of the selected genre's ID
    #[validate(
        required(message = "Genre is required"),
        custom(function = "validate_not_blank")
    )]
    pub genre_id: Option<String>,

    /// Game's price
    pub price: Price,

    /// Date the game was released
    pub release_date: NaiveDate,
}

impl GameDetails {
    pub fn new(
        name: impl Into<String>,
        genre_id: impl Into<String>,
        price: Price,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            genre_id: Some(genre_id.into()),
            price,
            release_date,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Genre is required".into());
        return Err(err);
    }
    Ok(())
}
