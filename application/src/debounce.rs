//! [`Debounce`] timer definitions.

use std::{future, time::Duration};

use tokio::{sync::mpsc, task::AbortHandle, time};

/// Timer coalescing a burst of values into the last one of them.
///
/// A value is [`fired`] once the configured delay elapses without a newer
/// value being [`schedule`]d.
///
/// [`fired`]: Debounce::fired
/// [`schedule`]: Debounce::schedule
#[derive(Debug)]
pub struct Debounce<T> {
    /// Delay a value waits for before being fired.
    delay: Duration,

    /// Sequence number of the latest scheduled value.
    sequence: u64,

    /// Handle of the timer of the latest scheduled value, if still pending.
    pending: Option<AbortHandle>,

    /// Sender of the elapsed timers.
    tx: mpsc::UnboundedSender<(u64, T)>,

    /// Receiver of the elapsed timers.
    rx: mpsc::UnboundedReceiver<(u64, T)>,
}

impl<T: Send + 'static> Debounce<T> {
    /// Creates a new [`Debounce`] timer with the provided `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            delay,
            sequence: 0,
            pending: None,
            tx,
            rx,
        }
    }

    /// Schedules the provided `value`, cancelling the pending one.
    ///
    /// Must be called within a [`tokio`] runtime.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let sequence = self.sequence;
        let delay = self.delay;
        let tx = self.tx.clone();
        let timer = tokio::spawn(async move {
            time::sleep(delay).await;
            _ = tx.send((sequence, value));
        });
        self.pending = Some(timer.abort_handle());
    }

    /// Cancels the pending value, if any.
    pub fn cancel(&mut self) {
        self.sequence = self.sequence.wrapping_add(1);
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }

    /// Indicates whether a scheduled value is still waiting to be fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Waits for the latest scheduled value to be fired.
    ///
    /// Never resolves while nothing is scheduled. Cancel safe, so may be
    /// used in [`tokio::select!`].
    pub async fn fired(&mut self) -> T {
        loop {
            // `self.tx` keeps the channel open.
            let Some((sequence, value)) = self.rx.recv().await else {
                return future::pending().await;
            };
            if sequence == self.sequence {
                self.pending = None;
                return value;
            }
        }
    }
}

impl<T> Drop for Debounce<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use tokio::time;

    use super::Debounce;

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let mut debounce = Debounce::new(DELAY);
        let started = time::Instant::now();

        debounce.schedule("pizza");

        assert_eq!(debounce.fired().await, "pizza");
        assert!(started.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn coalesces_burst_into_last_value() {
        let mut debounce = Debounce::new(DELAY);
        let started = time::Instant::now();

        for query in ["p", "pi", "piz", "pizz", "pizza"] {
            debounce.schedule(query);
            time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(debounce.fired().await, "pizza");
        assert!(started.elapsed() >= Duration::from_millis(400) + DELAY);

        let next = time::timeout(DELAY * 2, debounce.fired()).await;
        assert!(next.is_err(), "fired twice: {next:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn pending_until_fired() {
        let mut debounce = Debounce::new(DELAY);
        assert!(!debounce.is_pending());

        debounce.schedule("pizza");
        assert!(debounce.is_pending());

        time::sleep(DELAY * 2).await;
        assert!(debounce.is_pending(), "value is not taken yet");

        assert_eq!(debounce.fired().await, "pizza");
        assert!(!debounce.is_pending());

        debounce.schedule("pasta");
        debounce.cancel();
        assert!(!debounce.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancels_pending_value() {
        let mut debounce = Debounce::new(DELAY);

        debounce.schedule("pizza");
        debounce.cancel();

        let fired = time::timeout(DELAY * 2, debounce.fired()).await;
        assert!(fired.is_err(), "fired after cancel: {fired:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn ignores_timer_elapsed_before_reschedule() {
        let mut debounce = Debounce::new(DELAY);

        debounce.schedule("pasta");
        time::sleep(DELAY * 2).await;
        debounce.schedule("pizza");

        assert_eq!(debounce.fired().await, "pizza");
    }
}
