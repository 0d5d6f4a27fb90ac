use std::future::Future;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{self, Instant};

const TICK: Duration = Duration::from_secs(1);

/// One-second countdown running on its own task. At most one countdown is active per timer:
/// starting again cancels the previous one.
#[derive(Debug, Default)]
pub struct RoundTimer {
    cancel: Option<oneshot::Sender<()>>,
}

impl RoundTimer {
    /// Calls `on_tick` with the seconds left after every elapsed second, down to and including
    /// `0`, then awaits `on_expire` once. Nothing is called after a cancellation.
    pub fn start<T, E, Fut>(&mut self, duration_secs: u64, mut on_tick: T, on_expire: E)
    where
        T: FnMut(u64) + Send + 'static,
        E: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        self.cancel = Some(cancel_tx);
        tokio::spawn(async move {
            let mut ticks = time::interval_at(Instant::now() + TICK, TICK);
            let mut remaining = duration_secs;
            while remaining > 0 {
                tokio::select! {
                    // Fires on explicit cancellation and when the timer itself is dropped.
                    _ = &mut cancel_rx => return,
                    _ = ticks.tick() => {}
                }
                remaining -= 1;
                on_tick(remaining);
            }
            on_expire().await;
        });
    }

    /// No-op when the countdown already expired or was never started.
    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel.take() {
            let _ = cancel_tx.send(());
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|cancel_tx| !cancel_tx.is_closed())
    }
}
