use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AdminCredentials;
use crate::database::Store;
use crate::services::ids::IdGenerator;

pub type Clock = fn() -> DateTime<Utc>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub ids: Arc<IdGenerator>,
    pub admin: Arc<AdminCredentials>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, admin: AdminCredentials) -> Self {
        AppState {
            store,
            ids: Arc::new(IdGenerator::new()),
            admin: Arc::new(admin),
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
