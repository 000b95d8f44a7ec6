use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    League,
    Team,
    Match,
    News,
}

impl EntityKind {
    pub fn prefix(self) -> char {
        match self {
            EntityKind::League => 'l',
            EntityKind::Team => 't',
            EntityKind::Match => 'm',
            EntityKind::News => 'n',
        }
    }
}

/// Mints `<prefix><unix millis>` identifiers.
///
/// The millisecond part is strictly increasing across every id this
/// generator hands out, so records created within the same millisecond (or
/// after the wall clock steps back) still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&self, kind: EntityKind, now: DateTime<Utc>) -> String {
        let wanted = now.timestamp_millis();
        let mut last = self.last_millis.load(Ordering::Relaxed);

        loop {
            let next = wanted.max(last + 1);
            match self
                .last_millis
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return format!("{}{}", kind.prefix(), next),
                Err(actual) => last = actual,
            }
        }
    }
}
