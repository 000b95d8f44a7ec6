//! Match timer reconciliation.
//!
//! Elapsed playing time is only ever accrued by the server, at the moment a
//! running timer is stopped, from the persisted start instant. Clients choose
//! whether the timer runs and when it was (re)started, never how long it ran.

use chrono::{DateTime, Utc};

/// The timer-related slice of a persisted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerState {
    pub timer_running: bool,
    pub timer_start_time: Option<DateTime<Utc>>,
    pub elapsed_seconds: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTransition {
    /// Stopped -> Running
    Start,
    /// Running -> Stopped; the only transition that accrues time
    Stop,
    /// Running -> Running
    Running,
    /// Stopped -> Stopped
    Idle,
}

impl TimerTransition {
    pub fn between(was_running: bool, wants_running: bool) -> Self {
        match (was_running, wants_running) {
            (false, true) => TimerTransition::Start,
            (true, false) => TimerTransition::Stop,
            (true, true) => TimerTransition::Running,
            (false, false) => TimerTransition::Idle,
        }
    }
}

/// Whole seconds between `start` and `now`, floored. A missing start, or a
/// start later than `now`, contributes nothing.
fn accrued_seconds(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i32 {
    let Some(start) = start else {
        return 0;
    };

    let millis = (now - start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }

    i32::try_from(millis / 1000).unwrap_or(i32::MAX)
}

/// Computes the authoritative `elapsed_seconds` for a match update.
///
/// On a stop-transition the time since `previous.timer_start_time` is added to
/// the stored accumulator (absent counts as zero). Every other transition
/// passes the stored value through unchanged, including `None`.
pub fn reconcile_elapsed(
    previous: &TimerState,
    wants_running: bool,
    now: DateTime<Utc>,
) -> Option<i32> {
    match TimerTransition::between(previous.timer_running, wants_running) {
        TimerTransition::Stop => {
            let delta = accrued_seconds(previous.timer_start_time, now);
            Some(previous.elapsed_seconds.unwrap_or(0).saturating_add(delta))
        }
        TimerTransition::Start | TimerTransition::Running | TimerTransition::Idle => {
            previous.elapsed_seconds
        }
    }
}
