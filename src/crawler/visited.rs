//! Visited set shared by all steps of one walk

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// Set of URLs already claimed for fetching during one walk
///
/// The only mutation is [`VisitedSet::claim`], which checks and marks in a
/// single critical section. Two steps racing on the same URL therefore see
/// exactly one `true` between them.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as visited
    ///
    /// Returns `true` if this call claimed it, `false` if it was already marked.
    pub fn claim(&self, url: &str) -> bool {
        let mut urls = self.lock();
        if urls.contains(url) {
            return false;
        }
        urls.insert(url.to_string())
    }

    /// Returns true if `url` has been claimed
    ///
    /// Only meaningful once the walk is over; during a walk use `claim`.
    pub fn contains(&self, url: &str) -> bool {
        self.lock().contains(url)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The critical sections never run user code, so a poisoned lock still
    // holds a consistent set.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.urls.lock().unwrap_or_else(|e| e.into_inner())
    }
}
