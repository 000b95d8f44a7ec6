use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::convention::Schema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct News {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub image: Option<String>,
    pub date: DateTime<Utc>,
}

impl Schema for News {
    const FIELDS: &'static [&'static str] = &["id", "title", "content", "image", "date"];
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNews {
    #[validate(length(min = 1, message = "News title is required"))]
    pub title: String,
    pub content: Option<String>,
    pub image: Option<String>,
    /// Publication date; the creation time when omitted.
    pub date: Option<DateTime<Utc>>,
}

impl Schema for CreateNews {
    const FIELDS: &'static [&'static str] = &["title", "content", "image", "date"];
}

impl CreateNews {
    pub fn into_news(self, id: String, now: DateTime<Utc>) -> News {
        News {
            id,
            title: self.title,
            content: self.content,
            image: self.image,
            date: self.date.unwrap_or(now),
        }
    }
}
