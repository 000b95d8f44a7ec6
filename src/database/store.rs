use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{league::League, matches::Match, news::News, team::Team};

/// Persistence operations behind the HTTP handlers.
///
/// Every write is a single statement. Deletes report the number of rows
/// removed; callers decide whether zero matters.
#[async_trait]
pub trait Store: Send + Sync {
    async fn ping(&self) -> Result<()>;

    async fn list_leagues(&self) -> Result<Vec<League>>;
    async fn insert_league(&self, league: League) -> Result<League>;
    async fn delete_league(&self, id: &str) -> Result<u64>;

    async fn list_teams(&self) -> Result<Vec<Team>>;
    async fn insert_team(&self, team: Team) -> Result<Team>;
    async fn delete_team(&self, id: &str) -> Result<u64>;

    async fn list_matches(&self) -> Result<Vec<Match>>;
    async fn find_match(&self, id: &str) -> Result<Option<Match>>;
    async fn insert_match(&self, fixture: Match) -> Result<Match>;
    /// Overwrites every column of an existing match. `None` if the id is gone.
    async fn update_match(&self, fixture: Match) -> Result<Option<Match>>;
    async fn delete_match(&self, id: &str) -> Result<u64>;

    async fn list_news(&self) -> Result<Vec<News>>;
    async fn insert_news(&self, news: News) -> Result<News>;
    async fn delete_news(&self, id: &str) -> Result<u64>;
}
