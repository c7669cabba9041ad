use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::constants::PROGRESS_INTERVAL_BYTES;
use super::utils::report_progress;
use crate::TransferEvent;
use crate::config::OtaConfig;
use crate::error::TransferError;

/// Push a firmware image to the configured target over raw TCP.
///
/// The pipeline is strictly sequential: connect, open the image, then
/// alternate chunk reads and writes until end-of-file. Bytes hit the wire
/// in file order and chunk boundaries carry no meaning to the peer, which
/// infers completion from the connection closing. The connection and the
/// file handle are both released on every exit path.
///
/// # Arguments
/// * `config` - Target endpoint, chunk size and read-failure policy
/// * `firmware_path` - Local firmware image to stream
/// * `event_tx` - Channel to send progress events to the front-end
///
/// Returns the number of bytes pushed to the target.
pub async fn send_file(
    config: &OtaConfig,
    firmware_path: &Path,
    event_tx: mpsc::Sender<TransferEvent>,
) -> Result<u64, TransferError> {
    let endpoint = config.endpoint();
    info!("Connecting to {}", endpoint);

    let mut stream = TcpStream::connect((config.host.as_str(), config.port))
        .await
        .map_err(|source| TransferError::Connect { source })?;

    let _ = event_tx
        .send(TransferEvent::Status(format!("Connected to {}", endpoint)))
        .await;

    // The connection is live from here on; an early return drops it
    let mut file = File::open(firmware_path)
        .await
        .map_err(|source| TransferError::FileOpen {
            path: firmware_path.to_path_buf(),
            source,
        })?;

    let total_bytes = file
        .metadata()
        .await
        .map_err(|source| TransferError::FileOpen {
            path: firmware_path.to_path_buf(),
            source,
        })?
        .len();

    info!(
        "Sending firmware: {} ({} bytes, {} byte chunks)",
        firmware_path.display(),
        total_bytes,
        config.chunk_size
    );

    let mut buffer = vec![0u8; config.chunk_size.max(1)];
    let mut sent: u64 = 0;
    let mut last_progress_update = 0u64;
    let start_time = Instant::now();

    loop {
        let n = match file.read(&mut buffer).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(source) if config.strict_reads => {
                return Err(TransferError::Read {
                    bytes_sent: sent,
                    source,
                });
            }
            Err(e) => {
                // Legacy client behavior: any read failure ends the
                // stream as if it were end-of-file
                warn!("Read failed after {} bytes, stopping: {}", sent, e);
                break;
            }
        };

        stream
            .write_all(&buffer[..n])
            .await
            .map_err(|source| TransferError::Send {
                bytes_sent: sent,
                source,
            })?;
        sent += n as u64;

        // Report progress every PROGRESS_INTERVAL_BYTES or when complete
        if sent == total_bytes || sent - last_progress_update >= PROGRESS_INTERVAL_BYTES {
            last_progress_update = sent;
            report_progress(&event_tx, sent, total_bytes, start_time).await;
        }
    }

    // Flush and half-close so the peer observes a clean end-of-stream
    stream
        .shutdown()
        .await
        .map_err(|source| TransferError::Send {
            bytes_sent: sent,
            source,
        })?;

    info!(
        "Firmware sent: {} bytes in {:?}",
        sent,
        start_time.elapsed()
    );
    let _ = event_tx
        .send(TransferEvent::Completed { bytes_sent: sent })
        .await;

    Ok(sent)
}
