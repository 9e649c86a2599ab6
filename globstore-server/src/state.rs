//! Application state shared across handlers

use crate::config::ServerConfig;
use globstore_core::SharedStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// The store behind every endpoint
    pub store: SharedStore,
    /// Startup time for uptime reporting
    started: Instant,
    /// Operation counters
    pub sets: AtomicU64,
    pub gets: AtomicU64,
    pub kills: AtomicU64,
    pub cursor_reads: AtomicU64,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            store: SharedStore::new(),
            started: Instant::now(),
            sets: AtomicU64::new(0),
            gets: AtomicU64::new(0),
            kills: AtomicU64::new(0),
            cursor_reads: AtomicU64::new(0),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn count(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(counter: &AtomicU64) -> u64 {
        counter.load(Ordering::Relaxed)
    }
}
