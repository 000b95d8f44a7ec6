//! PostgreSQL implementation of the [`Store`].

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::store::Store;
use crate::errors::Result;
use crate::models::{league::League, matches::Match, news::News, team::Team};

const INSERT_MATCH: &str = "INSERT INTO matches (id, league_id, home_team_id, away_team_id, date_time, stadium, broadcasters, status, home_score, away_score, events, current_half, timer_running, timer_start_time, elapsed_seconds, first_half_extra_time, second_half_extra_time) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) RETURNING *";

const UPDATE_MATCH: &str = "UPDATE matches SET \
     league_id = $2, home_team_id = $3, away_team_id = $4, date_time = $5, stadium = $6, broadcasters = $7, \
     status = $8, home_score = $9, away_score = $10, events = $11, current_half = $12, timer_running = $13, \
     timer_start_time = $14, elapsed_seconds = $15, first_half_extra_time = $16, second_half_extra_time = $17 \
     WHERE id = $1 RETURNING *";

/// PostgreSQL-backed store sharing one connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn delete_by_id(&self, sql: &'static str, id: &str) -> Result<u64> {
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

// Binds columns in the order shared by INSERT_MATCH and UPDATE_MATCH.
fn bind_match<'q>(
    sql: &'q str,
    fixture: Match,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Match, sqlx::postgres::PgArguments> {
    sqlx::query_as::<_, Match>(sql)
        .bind(fixture.id)
        .bind(fixture.league_id)
        .bind(fixture.home_team_id)
        .bind(fixture.away_team_id)
        .bind(fixture.date_time)
        .bind(fixture.stadium)
        .bind(fixture.broadcasters)
        .bind(fixture.status)
        .bind(fixture.home_score)
        .bind(fixture.away_score)
        .bind(fixture.events)
        .bind(fixture.current_half)
        .bind(fixture.timer_running)
        .bind(fixture.timer_start_time)
        .bind(fixture.elapsed_seconds)
        .bind(fixture.first_half_extra_time)
        .bind(fixture.second_half_extra_time)
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_leagues(&self) -> Result<Vec<League>> {
        let leagues = sqlx::query_as::<_, League>("SELECT id, name FROM leagues")
            .fetch_all(&self.pool)
            .await?;
        Ok(leagues)
    }

    async fn insert_league(&self, league: League) -> Result<League> {
        let league = sqlx::query_as::<_, League>(
            "INSERT INTO leagues (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(league.id)
        .bind(league.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(league)
    }

    async fn delete_league(&self, id: &str) -> Result<u64> {
        self.delete_by_id("DELETE FROM leagues WHERE id = $1", id).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>("SELECT id, name, logo FROM teams")
            .fetch_all(&self.pool)
            .await?;
        Ok(teams)
    }

    async fn insert_team(&self, team: Team) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            "INSERT INTO teams (id, name, logo) VALUES ($1, $2, $3) RETURNING id, name, logo",
        )
        .bind(team.id)
        .bind(team.name)
        .bind(team.logo)
        .fetch_one(&self.pool)
        .await?;
        Ok(team)
    }

    async fn delete_team(&self, id: &str) -> Result<u64> {
        self.delete_by_id("DELETE FROM teams WHERE id = $1", id).await
    }

    async fn list_matches(&self) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>("SELECT * FROM matches")
            .fetch_all(&self.pool)
            .await?;
        Ok(matches)
    }

    async fn find_match(&self, id: &str) -> Result<Option<Match>> {
        let fixture = sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(fixture)
    }

    async fn insert_match(&self, fixture: Match) -> Result<Match> {
        let fixture = bind_match(INSERT_MATCH, fixture).fetch_one(&self.pool).await?;
        Ok(fixture)
    }

    async fn update_match(&self, fixture: Match) -> Result<Option<Match>> {
        let fixture = bind_match(UPDATE_MATCH, fixture)
            .fetch_optional(&self.pool)
            .await?;
        Ok(fixture)
    }

    async fn delete_match(&self, id: &str) -> Result<u64> {
        self.delete_by_id("DELETE FROM matches WHERE id = $1", id).await
    }

    async fn list_news(&self) -> Result<Vec<News>> {
        let news = sqlx::query_as::<_, News>("SELECT id, title, content, image, date FROM news")
            .fetch_all(&self.pool)
            .await?;
        Ok(news)
    }

    async fn insert_news(&self, news: News) -> Result<News> {
        let news = sqlx::query_as::<_, News>(
            "INSERT INTO news (id, title, content, image, date) VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, content, image, date",
        )
        .bind(news.id)
        .bind(news.title)
        .bind(news.content)
        .bind(news.image)
        .bind(news.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(news)
    }

    async fn delete_news(&self, id: &str) -> Result<u64> {
        self.delete_by_id("DELETE FROM news WHERE id = $1", id).await
    }
}
