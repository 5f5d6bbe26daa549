use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Enquiries accepted per client address per window.
pub const CONTACT_LIMIT: u32 = 5;
pub const CONTACT_WINDOW: Duration = Duration::from_secs(60);

/// Fixed-window limiter for the public contact form, keyed by client IP.
pub struct ContactRateLimiter {
    /// ip -> (count, window_start)
    entries: DashMap<IpAddr, (u32, Instant)>,
    limit: u32,
    window: Duration,
}

impl Default for ContactRateLimiter {
    fn default() -> Self {
        Self::new(CONTACT_LIMIT, CONTACT_WINDOW)
    }
}

impl ContactRateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            limit,
            window,
        }
    }

    /// Count one attempt. Returns Err with the seconds until the window resets.
    pub fn check(&self, ip: IpAddr) -> Result<(), u64> {
        self.check_at(ip, Instant::now())
    }

    fn check_at(&self, ip: IpAddr, now: Instant) -> Result<(), u64> {
        let mut entry = self.entries.entry(ip).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > self.window {
            *count = 1;
            *start = now;
            return Ok(());
        }

        if *count >= self.limit {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(self.window.as_secs().saturating_sub(elapsed));
        }

        *count += 1;
        Ok(())
    }

    /// Drop entries whose window has long passed.
    pub fn cleanup(&self) {
        let now = Instant::now();
        self.entries
            .retain(|_, (_, start)| now.duration_since(*start) < self.window * 2);
    }
}
