pub mod auth;
pub mod leagues;
pub mod matches;
pub mod news;
pub mod teams;
