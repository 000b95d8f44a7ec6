use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::convention::Schema;
use crate::services::timer::TimerState;

const MATCH_FIELDS: &[&str] = &[
    "id",
    "league_id",
    "home_team_id",
    "away_team_id",
    "date_time",
    "stadium",
    "broadcasters",
    "status",
    "home_score",
    "away_score",
    "events",
    "current_half",
    "timer_running",
    "timer_start_time",
    "elapsed_seconds",
    "first_half_extra_time",
    "second_half_extra_time",
];

// Main Match model - one row of the `matches` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Match {
    pub id: String,
    pub league_id: Option<String>,
    pub home_team_id: Option<String>,
    pub away_team_id: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub stadium: Option<String>,
    pub broadcasters: Option<Vec<String>>,
    pub status: Option<String>, // "scheduled", "live", "finished", ... not validated
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    /// Opaque event records, stored as a JSONB array.
    pub events: Value,
    pub current_half: Option<i32>,
    pub timer_running: bool,
    pub timer_start_time: Option<DateTime<Utc>>,
    pub elapsed_seconds: Option<i32>,
    pub first_half_extra_time: Option<i32>,
    pub second_half_extra_time: Option<i32>,
}

impl Schema for Match {
    const FIELDS: &'static [&'static str] = MATCH_FIELDS;
}

impl Match {
    pub fn timer(&self) -> TimerState {
        TimerState {
            timer_running: self.timer_running,
            timer_start_time: self.timer_start_time,
            elapsed_seconds: self.elapsed_seconds,
        }
    }
}

/// Most recent kick-off first, undated matches last.
pub fn newest_first(a: &Match, b: &Match) -> Ordering {
    match (&a.date_time, &b.date_time) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Desired match state, used by both create and full-record update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MatchPayload {
    pub league_id: Option<String>,
    pub home_team_id: Option<String>,
    pub away_team_id: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub stadium: Option<String>,
    pub broadcasters: Option<Vec<String>>,
    pub status: Option<String>,

    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub home_score: Option<i32>,

    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub away_score: Option<i32>,

    pub events: Option<Vec<Value>>,

    #[validate(range(min = 0, message = "Half cannot be negative"))]
    pub current_half: Option<i32>,

    pub timer_running: Option<bool>,
    pub timer_start_time: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "Elapsed seconds cannot be negative"))]
    pub elapsed_seconds: Option<i32>,

    #[validate(range(min = 0, message = "Extra time cannot be negative"))]
    pub first_half_extra_time: Option<i32>,

    #[validate(range(min = 0, message = "Extra time cannot be negative"))]
    pub second_half_extra_time: Option<i32>,
}

impl Schema for MatchPayload {
    const FIELDS: &'static [&'static str] = MATCH_FIELDS;
}

impl MatchPayload {
    /// Whether the caller wants the timer running. An absent flag means stopped.
    pub fn wants_timer_running(&self) -> bool {
        self.timer_running.unwrap_or(false)
    }

    /// Materializes the payload as a full record. Missing events become an
    /// empty list.
    pub fn into_match(self, id: String) -> Match {
        let timer_running = self.wants_timer_running();
        Match {
            id,
            league_id: self.league_id,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            date_time: self.date_time,
            stadium: self.stadium,
            broadcasters: self.broadcasters,
            status: self.status,
            home_score: self.home_score,
            away_score: self.away_score,
            events: Value::Array(self.events.unwrap_or_default()),
            current_half: self.current_half,
            timer_running,
            timer_start_time: self.timer_start_time,
            elapsed_seconds: self.elapsed_seconds,
            first_half_extra_time: self.first_half_extra_time,
            second_half_extra_time: self.second_half_extra_time,
        }
    }
}
