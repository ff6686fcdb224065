use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;

pub const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

/// Sends `Tick` until the receiver goes away or the task is aborted.
pub async fn start_ticker(tx: mpsc::UnboundedSender<AppEvent>, period: Duration) {
    let mut interval = tokio::time::interval(period);
    interval.tick().await;

    loop {
        interval.tick().await;
        if tx.send(AppEvent::Tick).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stops_when_receiver_dropped() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(start_ticker(tx, Duration::from_millis(1)));

        assert!(matches!(rx.recv().await, Some(AppEvent::Tick)));
        drop(rx);

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
