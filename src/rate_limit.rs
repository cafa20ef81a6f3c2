use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Max contact submissions per client within [`WINDOW`].
pub const MAX_SUBMISSIONS: u64 = 5;
pub const WINDOW: Duration = Duration::from_secs(15 * 60);

/// In-memory limiter for the public contact endpoints, keyed by client
/// address. State is per-process and resets on restart, which is enough
/// for a single personal site.
pub struct ContactLimiter {
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
}

impl ContactLimiter {
    pub fn new() -> Self {
        ContactLimiter {
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Record an attempt and return true if the client is under the limit.
    pub fn allow(&self, client: &str) -> bool {
        let mut map = self.attempts.lock().unwrap();
        let now = Instant::now();

        let attempts = map.entry(client.to_string()).or_default();
        attempts.retain(|t| now.duration_since(*t) < WINDOW);

        if (attempts.len() as u64) < MAX_SUBMISSIONS {
            attempts.push(now);
            true
        } else {
            false
        }
    }
}

impl Default for ContactLimiter {
    fn default() -> Self {
        Self::new()
    }
}
