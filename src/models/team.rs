use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::convention::Schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
}

impl Schema for Team {
    const FIELDS: &'static [&'static str] = &["id", "name", "logo"];
}

// For creating new teams
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeam {
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,
    pub logo: Option<String>,
}

impl Schema for CreateTeam {
    const FIELDS: &'static [&'static str] = &["name", "logo"];
}

impl CreateTeam {
    pub fn into_team(self, id: String) -> Team {
        Team {
            id,
            name: self.name,
            logo: self.logo,
        }
    }
}
