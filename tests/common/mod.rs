#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use kora_live_api::{
    build_router,
    config::AdminCredentials,
    database::Store,
    errors::{AppError, Result},
    models::{league::League, matches::Match, news::News, team::Team},
    state::AppState,
};

pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap()
}

/// Kick-off plus 45 seconds; the clock every test app runs on.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 45).unwrap()
}

/// Store kept in process memory, counting every write it accepts.
#[derive(Default)]
pub struct MemoryStore {
    leagues: Mutex<Vec<League>>,
    teams: Mutex<Vec<Team>>,
    matches: Mutex<Vec<Match>>,
    news: Mutex<Vec<News>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn seed_league(&self, league: League) {
        self.leagues.lock().unwrap().push(league);
    }

    pub fn seed_match(&self, fixture: Match) {
        self.matches.lock().unwrap().push(fixture);
    }

    pub fn seed_news(&self, news: News) {
        self.news.lock().unwrap().push(news);
    }

    pub fn stored_match(&self, id: &str) -> Option<Match> {
        self.matches.lock().unwrap().iter().find(|m| m.id == id).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn wrote(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

fn remove_by<T>(rows: &Mutex<Vec<T>>, keep: impl Fn(&T) -> bool) -> u64 {
    let mut rows = rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|row| keep(row));
    (before - rows.len()) as u64
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn list_leagues(&self) -> Result<Vec<League>> {
        Ok(self.leagues.lock().unwrap().clone())
    }

    async fn insert_league(&self, league: League) -> Result<League> {
        self.wrote();
        self.leagues.lock().unwrap().push(league.clone());
        Ok(league)
    }

    async fn delete_league(&self, id: &str) -> Result<u64> {
        self.wrote();
        Ok(remove_by(&self.leagues, |l| l.id != id))
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        Ok(self.teams.lock().unwrap().clone())
    }

    async fn insert_team(&self, team: Team) -> Result<Team> {
        self.wrote();
        self.teams.lock().unwrap().push(team.clone());
        Ok(team)
    }

    async fn delete_team(&self, id: &str) -> Result<u64> {
        self.wrote();
        Ok(remove_by(&self.teams, |t| t.id != id))
    }

    async fn list_matches(&self) -> Result<Vec<Match>> {
        Ok(self.matches.lock().unwrap().clone())
    }

    async fn find_match(&self, id: &str) -> Result<Option<Match>> {
        Ok(self.stored_match(id))
    }

    async fn insert_match(&self, fixture: Match) -> Result<Match> {
        self.wrote();
        self.matches.lock().unwrap().push(fixture.clone());
        Ok(fixture)
    }

    async fn update_match(&self, fixture: Match) -> Result<Option<Match>> {
        let mut matches = self.matches.lock().unwrap();
        let Some(slot) = matches.iter_mut().find(|m| m.id == fixture.id) else {
            return Ok(None);
        };
        self.wrote();
        *slot = fixture.clone();
        Ok(Some(fixture))
    }

    async fn delete_match(&self, id: &str) -> Result<u64> {
        self.wrote();
        Ok(remove_by(&self.matches, |m| m.id != id))
    }

    async fn list_news(&self) -> Result<Vec<News>> {
        Ok(self.news.lock().unwrap().clone())
    }

    async fn insert_news(&self, news: News) -> Result<News> {
        self.wrote();
        self.news.lock().unwrap().push(news.clone());
        Ok(news)
    }

    async fn delete_news(&self, id: &str) -> Result<u64> {
        self.wrote();
        Ok(remove_by(&self.news, |n| n.id != id))
    }
}

/// Store whose every call fails the way an unreachable database does.
pub struct FailingStore;

fn unreachable_db<T>() -> Result<T> {
    Err(AppError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl Store for FailingStore {
    async fn ping(&self) -> Result<()> {
        unreachable_db()
    }
    async fn list_leagues(&self) -> Result<Vec<League>> {
        unreachable_db()
    }
    async fn insert_league(&self, _league: League) -> Result<League> {
        unreachable_db()
    }
    async fn delete_league(&self, _id: &str) -> Result<u64> {
        unreachable_db()
    }
    async fn list_teams(&self) -> Result<Vec<Team>> {
        unreachable_db()
    }
    async fn insert_team(&self, _team: Team) -> Result<Team> {
        unreachable_db()
    }
    async fn delete_team(&self, _id: &str) -> Result<u64> {
        unreachable_db()
    }
    async fn list_matches(&self) -> Result<Vec<Match>> {
        unreachable_db()
    }
    async fn find_match(&self, _id: &str) -> Result<Option<Match>> {
        unreachable_db()
    }
    async fn insert_match(&self, _fixture: Match) -> Result<Match> {
        unreachable_db()
    }
    async fn update_match(&self, _fixture: Match) -> Result<Option<Match>> {
        unreachable_db()
    }
    async fn delete_match(&self, _id: &str) -> Result<u64> {
        unreachable_db()
    }
    async fn list_news(&self) -> Result<Vec<News>> {
        unreachable_db()
    }
    async fn insert_news(&self, _news: News) -> Result<News> {
        unreachable_db()
    }
    async fn delete_news(&self, _id: &str) -> Result<u64> {
        unreachable_db()
    }
}

pub fn app_with(store: Arc<dyn Store>) -> Router {
    let state = AppState::new(store, AdminCredentials::default()).with_clock(fixed_now);
    build_router(state)
}

pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (app_with(store.clone()), store)
}

/// Sends one request through the router and decodes the JSON reply
/// (`Value::Null` for an empty body, `Value::String` for a non-JSON one).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}
