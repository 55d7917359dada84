//! Global, named event counters.
//!
//! Counters are created lazily the first time a [counter!] site is reached and are dumped through
//! `log` by [report_counters]. When the `counter` feature is disabled, [counter!] compiles to nothing.
use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

#[derive(Default)]
pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }
    pub fn inc(&self) {
        // Increments commute, no ordering needed
        self.atomic.fetch_add(1, Ordering::Relaxed);
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<BTreeMap<&'static str, Arc<Counter>>> = Mutex::new(BTreeMap::new());
}

/// Register a counter named `descr`, or get the one already registered under that name
pub fn insert_counter(descr: &'static str) -> Arc<Counter> {
    let mut counters = __COUNTERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    counters.entry(descr).or_default().clone()
}

/// Snapshot of every registered counter, sorted by name
pub fn counter_values() -> Vec<(&'static str, u64)> {
    let counters = __COUNTERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    counters
        .iter()
        .map(|(name, counter)| (*name, counter.value()))
        .collect()
}

pub fn report_counters() {
    for (counter_name, value) in counter_values() {
        log::info!(target: "counter_report", "{}: {}", counter_name, value);
    }
}

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, Counter};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<Counter> = insert_counter($descr);
            }
            COUNTER_REF.inc();
        }
    };
}

pub use counter;
// Reexport for ease of use
pub use lazy_static;
