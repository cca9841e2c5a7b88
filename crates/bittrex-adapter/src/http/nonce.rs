/*
[INPUT]:  Current wall-clock time in milliseconds
[OUTPUT]: Nonces unique within the recent request window
[POS]:    HTTP layer - nonce generation for signed requests
[UPDATE]: When changing window size or collision handling
*/

use std::collections::VecDeque;

/// How many previously issued nonces are remembered for collision checks.
const NONCE_WINDOW: usize = 50;

/// Tracks recently issued nonces so that two signed requests built within the
/// same millisecond (or after a backwards clock step) never share a nonce.
///
/// Collisions are resolved by incrementing the candidate until it leaves the
/// window. The window holds at most [`NONCE_WINDOW`] distinct values, so the
/// loop is bounded even when the clock does not advance at all.
#[derive(Debug, Default)]
pub struct NonceLedger {
    recent: VecDeque<u64>,
}

impl NonceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next nonce for the given timestamp (milliseconds).
    pub fn next(&mut self, timestamp_ms: u64) -> u64 {
        let mut candidate = timestamp_ms;
        while self.recent.contains(&candidate) {
            candidate += 1;
        }
        if self.recent.len() >= NONCE_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(candidate);
        candidate
    }
}
