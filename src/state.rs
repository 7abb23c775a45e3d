use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::league::LeagueSimulator;

/// Everything the HTTP layer mutates, guarded by a single lock.
#[derive(Debug)]
pub struct AppState {
    pub league: LeagueSimulator,
    pub logs: VecDeque<String>,
    log_limit: usize,
}

impl AppState {
    pub fn new(league: LeagueSimulator, log_limit: usize) -> Self {
        Self {
            league,
            logs: VecDeque::new(),
            log_limit: log_limit.max(1),
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        let stamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        self.logs.push_back(format!("{stamp} {}", msg.into()));
        while self.logs.len() > self.log_limit {
            self.logs.pop_front();
        }
    }
}

#[derive(Debug, Clone)]
pub struct SharedState(Arc<Mutex<AppState>>);

impl SharedState {
    pub fn new(state: AppState) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }

    /// Held for the whole of one request.
    pub fn lock(&self) -> MutexGuard<'_, AppState> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_teams;

    #[test]
    fn push_log_drops_oldest_entries() {
        let league = LeagueSimulator::with_seed(default_teams(), 1).unwrap();
        let mut state = AppState::new(league, 3);
        for i in 0..5 {
            state.push_log(format!("[INFO] entry {i}"));
        }
        assert_eq!(state.logs.len(), 3);
        assert!(state.logs.front().unwrap().ends_with("[INFO] entry 2"));
        assert!(state.logs.back().unwrap().ends_with("[INFO] entry 4"));
    }
}
