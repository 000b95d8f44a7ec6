pub(crate) mod auth;
pub(crate) mod health;
pub(crate) mod leagues;
pub(crate) mod matches;
pub(crate) mod news;
pub(crate) mod teams;
