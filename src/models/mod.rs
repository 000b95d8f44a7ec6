pub mod league;
pub mod matches;
pub mod news;
pub mod team;
