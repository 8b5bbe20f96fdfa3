//! Process-wide viewport signal.
//!
//! The runtime publishes the current terminal viewport here whenever the
//! terminal is resized. Widgets that care about the viewport subscribe while
//! they are attached and drop their subscription when detached, so a torn-down
//! widget never keeps a listener alive.

use crossterm::terminal;
use sidenav_types::Viewport;
use tokio::sync::watch;
use tracing::debug;

/// Broadcasts viewport changes to attached widgets.
#[derive(Debug)]
pub struct ViewportSignal {
    sender: watch::Sender<Viewport>,
}

/// A live subscription to a [`ViewportSignal`]. Dropping it detaches the listener.
#[derive(Debug)]
pub struct ViewportSubscription {
    receiver: watch::Receiver<Viewport>,
}

impl ViewportSignal {
    pub fn new(initial: Viewport) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Latest published viewport.
    pub fn current(&self) -> Viewport {
        *self.sender.borrow()
    }

    /// Publishes a viewport to every subscriber.
    ///
    /// Subscribers are notified even when the value is unchanged, mirroring a
    /// resize event that lands on the same size.
    pub fn publish(&self, viewport: Viewport) {
        debug!(width = viewport.width, height = viewport.height, "viewport published");
        self.sender.send_replace(viewport);
    }

    pub fn subscribe(&self) -> ViewportSubscription {
        ViewportSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ViewportSignal {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ViewportSubscription {
    /// Returns the latest viewport if one was published since the last call.
    pub fn take_change(&mut self) -> Option<Viewport> {
        match self.receiver.has_changed() {
            Ok(true) => Some(*self.receiver.borrow_and_update()),
            _ => None,
        }
    }
}

/// Measures the terminal viewport in pixels.
///
/// Uses the pixel size the terminal reports; terminals that report zero pixels
/// fall back to a per-cell estimate.
pub fn measure_viewport(columns: u16, rows: u16) -> Viewport {
    match terminal::window_size() {
        Ok(size) if size.width > 0 && size.columns == columns => Viewport::new(u32::from(size.width), u32::from(size.height)),
        _ => Viewport::from_cells(columns, rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriptions_are_counted_and_released_on_drop() {
        let signal = ViewportSignal::new(Viewport::new(1200, 800));
        assert_eq!(signal.listener_count(), 0);
        let first = signal.subscribe();
        let second = signal.subscribe();
        assert_eq!(signal.listener_count(), 2);
        drop(first);
        assert_eq!(signal.listener_count(), 1);
        drop(second);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn changes_are_observed_once() {
        let signal = ViewportSignal::new(Viewport::new(1200, 800));
        let mut subscription = signal.subscribe();
        assert_eq!(subscription.take_change(), None);

        signal.publish(Viewport::new(500, 800));
        signal.publish(Viewport::new(640, 800));
        assert_eq!(subscription.take_change(), Some(Viewport::new(640, 800)));
        assert_eq!(subscription.take_change(), None);
        assert_eq!(signal.current(), Viewport::new(640, 800));
    }

    #[test]
    fn publishing_without_listeners_still_updates_current() {
        let signal = ViewportSignal::default();
        signal.publish(Viewport::new(927, 10));
        assert_eq!(signal.current().width, 927);
    }
}
