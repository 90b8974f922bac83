use crate::state::messages::UiEvent;
use log::debug;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Emits a `RefreshTick` every `interval`.
///
/// Only one timer is ever pending: the next sleep starts after the previous
/// tick was delivered, and a message on `resets` restarts the current sleep
/// from zero (used when the user switches screens).
pub struct PeriodicRefresher {
    interval: Duration,
    ui_events: mpsc::Sender<UiEvent>,
    resets: mpsc::Receiver<()>,
}

impl PeriodicRefresher {
    pub fn new(
        interval: Duration,
        ui_events: mpsc::Sender<UiEvent>,
        resets: mpsc::Receiver<()>,
    ) -> Self {
        Self { interval, ui_events, resets }
    }

    pub async fn run(mut self) {
        loop {
            tokio::select! {
                _ = sleep(self.interval) => {
                    if self.ui_events.send(UiEvent::RefreshTick).await.is_err() {
                        break;
                    }
                }
                reset = self.resets.recv() => {
                    if reset.is_none() {
                        break;
                    }
                    debug!("refresh timer restarted");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_after_each_interval() {
        let (ui_tx, mut ui_rx) = mpsc::channel(4);
        let (_reset_tx, reset_rx) = mpsc::channel(4);
        let task = tokio::spawn(PeriodicRefresher::new(Duration::from_secs(10), ui_tx, reset_rx).run());

        for _ in 0..2 {
            let event = ui_rx.recv().await.unwrap();
            assert!(matches!(event, UiEvent::RefreshTick));
        }
        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restarts_the_wait() {
        let (ui_tx, mut ui_rx) = mpsc::channel(4);
        let (reset_tx, reset_rx) = mpsc::channel(4);
        let start = tokio::time::Instant::now();
        let task = tokio::spawn(PeriodicRefresher::new(Duration::from_secs(10), ui_tx, reset_rx).run());

        sleep(Duration::from_secs(6)).await;
        reset_tx.send(()).await.unwrap();

        ui_rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(16));
        task.abort();
    }
}
