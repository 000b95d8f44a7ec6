use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::convention::Schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct League {
    pub id: String,
    pub name: String,
}

impl Schema for League {
    const FIELDS: &'static [&'static str] = &["id", "name"];
}

// For creating new leagues
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeague {
    #[validate(length(min = 1, message = "League name is required"))]
    pub name: String,
}

impl Schema for CreateLeague {
    const FIELDS: &'static [&'static str] = &["name"];
}

impl CreateLeague {
    pub fn into_league(self, id: String) -> League {
        League { id, name: self.name }
    }
}
