pub mod config;
pub mod error;
pub mod transfer;

pub use config::OtaConfig;
pub use error::TransferError;
pub use transfer::send_file;

//Struct report from the transfer runner to the front-end
#[derive(Debug, Clone)]
pub enum TransferEvent {
    ///Free-form status line
    Status(String),
    ///Bytes pushed so far, throttled while the stream loop runs
    Progress {
        bytes_sent: u64,
        total_bytes: u64,
        speed: String,
        speed_bps: f64,
    },
    ///All bytes flushed and the stream half-closed
    Completed { bytes_sent: u64 },
}
