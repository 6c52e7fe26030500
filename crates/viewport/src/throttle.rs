use std::time::{Duration, Instant};

/// Leading and trailing edge rate limiter.
///
/// The first sample passes straight through. Samples arriving before
/// `interval` has elapsed are held, and only the most recent one is emitted
/// once the window closes (see [`Throttle::poll`]). Time is always passed in
/// by the caller.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    last_emit: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn window_open(&self, now: Instant) -> bool {
        match self.last_emit {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    /// Offers a sample; returns it when it may be applied right away.
    pub fn offer(&mut self, value: T, now: Instant) -> Option<T> {
        if self.window_open(now) {
            self.last_emit = Some(now);
            self.pending = None;
            return Some(value);
        }

        self.pending = Some(value);
        None
    }

    /// Emits the held trailing sample once its window has closed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_none() || !self.window_open(now) {
            return None;
        }

        self.last_emit = Some(now);
        self.pending.take()
    }

    /// When the held sample becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match (&self.pending, self.last_emit) {
            (Some(_), Some(last)) => Some(last + self.interval),
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any held sample and resets the window.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_emit = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn first_sample_passes() {
        let mut throttle = Throttle::new(MS_100);

        assert_eq!(throttle.offer(1, Instant::now()), Some(1));
    }

    #[test]
    fn samples_inside_window_are_held() {
        let start = Instant::now();
        let mut throttle = Throttle::new(MS_100);

        throttle.offer(1, start);
        assert_eq!(throttle.offer(2, start + Duration::from_millis(10)), None);
        assert_eq!(throttle.offer(3, start + Duration::from_millis(40)), None);
        assert_eq!(throttle.deadline(), Some(start + MS_100));

        assert_eq!(throttle.poll(start + Duration::from_millis(90)), None);
        assert_eq!(throttle.poll(start + MS_100), Some(3));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn sample_after_window_passes_and_discards_held() {
        let start = Instant::now();
        let mut throttle = Throttle::new(MS_100);

        throttle.offer(1, start);
        throttle.offer(2, start + Duration::from_millis(50));

        assert_eq!(throttle.offer(3, start + Duration::from_millis(150)), Some(3));
        assert_eq!(throttle.poll(start + Duration::from_millis(400)), None);
    }

    #[test]
    fn cancel_drops_trailing_sample() {
        let start = Instant::now();
        let mut throttle = Throttle::new(MS_100);

        throttle.offer(1, start);
        throttle.offer(2, start + Duration::from_millis(10));
        throttle.cancel();

        assert_eq!(throttle.poll(start + Duration::from_millis(500)), None);
        assert_eq!(throttle.offer(4, start + Duration::from_millis(20)), Some(4));
    }
}
