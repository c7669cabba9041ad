use crate::TransferEvent;
use std::time::Instant;
use tokio::sync::mpsc;

/// Format transfer speed from bytes and elapsed time
pub fn format_transfer_speed(bytes_transferred: u64, elapsed_secs: f64) -> String {
    if elapsed_secs <= 0.0 {
        return "Starting...".to_string();
    }

    let speed_bps = bytes_transferred as f64 / elapsed_secs;
    if speed_bps > 1_000_000.0 {
        format!("{:.2} MB/s", speed_bps / 1_000_000.0)
    } else if speed_bps > 1_000.0 {
        format!("{:.1} KB/s", speed_bps / 1_000.0)
    } else {
        format!("{:.0} B/s", speed_bps)
    }
}

/// Report transfer progress to the event channel
pub async fn report_progress(
    event_tx: &mpsc::Sender<TransferEvent>,
    bytes_sent: u64,
    total_bytes: u64,
    start_time: Instant,
) {
    let elapsed = start_time.elapsed().as_secs_f64();
    let speed_bps = if elapsed > 0.0 {
        bytes_sent as f64 / elapsed
    } else {
        0.0
    };
    let speed = format_transfer_speed(bytes_sent, elapsed);

    let _ = event_tx
        .send(TransferEvent::Progress {
            bytes_sent,
            total_bytes,
            speed,
            speed_bps,
        })
        .await;
}
