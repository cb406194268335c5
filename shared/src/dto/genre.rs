use crate::models::genre::Genre;
use serde::{Deserialize, Serialize};

/// One entry of a genre select control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreOption {
    /// Option value, the genre's ID as a string
    pub value: String,
    /// Option label, the genre's name
    pub label: String,
}

impl From<&Genre> for GenreOption {
    fn from(genre: &Genre) -> Self {
        Self {
            value: genre.id.to_string(),
            label: genre.name.clone(),
        }
    }
}
