use serde::{Deserialize, Serialize};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::watch;

use crate::Throttle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

struct Inner {
    scroll: watch::Sender<f64>,
    pointer: watch::Sender<Point>,
}

/// Observed scroll offset and pointer position for one mounted page.
///
/// Components receive the context explicitly and hold a [`Subscription`]
/// for as long as they are mounted; dropping it unsubscribes.
#[derive(Clone)]
pub struct ViewportContext {
    inner: Arc<Inner>,
}

impl Default for ViewportContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportContext {
    pub fn new() -> Self {
        let (scroll, _) = watch::channel(0.0);
        let (pointer, _) = watch::channel(Point::default());

        Self {
            inner: Arc::new(Inner { scroll, pointer }),
        }
    }

    pub fn subscribe_scroll(&self) -> Subscription<f64> {
        Subscription(self.inner.scroll.subscribe())
    }

    pub fn subscribe_pointer(&self) -> Subscription<Point> {
        Subscription(self.inner.pointer.subscribe())
    }

    pub fn scroll_y(&self) -> f64 {
        *self.inner.scroll.borrow()
    }

    pub fn pointer(&self) -> Point {
        *self.inner.pointer.borrow()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.scroll.receiver_count() + self.inner.pointer.receiver_count()
    }

    /// Input side of the context, owned by whatever receives raw events.
    /// Pointer samples go through a throttle of `pointer_interval`.
    pub fn feed(&self, pointer_interval: Duration) -> ViewportFeed {
        ViewportFeed {
            context: self.clone(),
            pointer_throttle: Throttle::new(pointer_interval),
        }
    }
}

/// Scoped observation of one value. Released on drop.
pub struct Subscription<T>(watch::Receiver<T>);

impl<T: Copy> Subscription<T> {
    pub fn get(&self) -> T {
        *self.0.borrow()
    }

    /// Waits for the next update; `None` once the context is gone.
    pub async fn changed(&mut self) -> Option<T> {
        self.0.changed().await.ok()?;
        Some(*self.0.borrow_and_update())
    }
}

pub struct ViewportFeed {
    context: ViewportContext,
    pointer_throttle: Throttle<Point>,
}

impl ViewportFeed {
    pub fn scrolled(&self, y: f64) {
        self.context.inner.scroll.send_replace(y);
    }

    /// Returns true when the sample was published immediately.
    pub fn pointer_moved(&mut self, point: Point, now: Instant) -> bool {
        match self.pointer_throttle.offer(point, now) {
            Some(point) => {
                self.context.inner.pointer.send_replace(point);
                true
            }
            None => false,
        }
    }

    /// Publishes the held pointer sample once the throttle window closed.
    pub fn flush(&mut self, now: Instant) -> bool {
        match self.pointer_throttle.poll(now) {
            Some(point) => {
                self.context.inner.pointer.send_replace(point);
                true
            }
            None => false,
        }
    }

    pub fn next_flush(&self) -> Option<Instant> {
        self.pointer_throttle.deadline()
    }
}

impl Drop for ViewportFeed {
    fn drop(&mut self) {
        if self.pointer_throttle.has_pending() {
            tracing::trace!("dropping held pointer sample");
        }
        self.pointer_throttle.cancel();
    }
}

/// Background of the cursor glow layer, centered on the pointer.
pub fn glow_background(point: Point) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, rgba(173, 216, 230, 0.2), transparent clamp(150px, 20vw, 250px))",
        point.x, point.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_updates_reach_subscribers() {
        let context = ViewportContext::new();
        let subscription = context.subscribe_scroll();
        let feed = context.feed(Duration::from_millis(100));

        feed.scrolled(120.0);

        assert_eq!(subscription.get(), 120.0);
        assert_eq!(context.scroll_y(), 120.0);
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let context = ViewportContext::new();
        assert_eq!(context.subscriber_count(), 0);

        let scroll = context.subscribe_scroll();
        let pointer = context.subscribe_pointer();
        assert_eq!(context.subscriber_count(), 2);

        drop(scroll);
        assert_eq!(context.subscriber_count(), 1);
        drop(pointer);
        assert_eq!(context.subscriber_count(), 0);
    }

    #[test]
    fn pointer_samples_are_throttled() {
        let start = Instant::now();
        let context = ViewportContext::new();
        let mut feed = context.feed(Duration::from_millis(100));

        assert!(feed.pointer_moved(Point::new(1.0, 1.0), start));
        assert!(!feed.pointer_moved(Point::new(5.0, 5.0), start + Duration::from_millis(30)));
        assert_eq!(context.pointer(), Point::new(1.0, 1.0));

        assert!(feed.flush(start + Duration::from_millis(100)));
        assert_eq!(context.pointer(), Point::new(5.0, 5.0));
    }

    #[test]
    fn glow_follows_pointer() {
        assert!(glow_background(Point::new(10.0, 20.5)).starts_with("radial-gradient(circle at 10px 20.5px"));
    }
}
