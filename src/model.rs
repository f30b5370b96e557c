//! The SuperHero record as stored in `"SuperHeroes"` and exchanged over HTTP.

use serde::{Deserialize, Serialize};

/// One row of the `SuperHeroes` table.
///
/// JSON keys are camelCase; the PascalCase column names are accepted on input too.
/// `id` is assigned by the store and may be omitted when creating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SuperHero {
    #[serde(default, alias = "Id")]
    #[sqlx(rename = "Id")]
    pub id: i32,
    #[serde(alias = "Name")]
    #[sqlx(rename = "Name")]
    pub name: String,
    #[serde(alias = "FirstName")]
    #[sqlx(rename = "FirstName")]
    pub first_name: String,
    #[serde(alias = "LastName")]
    #[sqlx(rename = "LastName")]
    pub last_name: String,
    #[serde(alias = "Place")]
    #[sqlx(rename = "Place")]
    pub place: String,
}

impl SuperHero {
    /// True when all non-key fields match `other`. Ids are ignored.
    pub fn same_fields(&self, other: &SuperHero) -> bool {
        self.name == other.name
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.place == other.place
    }
}
