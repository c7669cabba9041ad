use clap::Parser;
use ota_core::{OtaConfig, TransferEvent, send_file};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Parser)]
#[command(name = "ota_cli")]
#[command(about = "Push a firmware image to an OTA-capable device over raw TCP", long_about = None)]
struct Cli {
    /// Firmware file to push
    firmware: PathBuf,

    /// Destination device address (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Destination TCP port (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bytes per read/write cycle (overrides the config file)
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Treat read failures as end-of-file and report success anyway,
    /// matching the historical client
    #[arg(long)]
    lenient: bool,
}

impl Cli {
    /// Config-file values as the base, command-line flags win
    fn into_config(self) -> (OtaConfig, PathBuf) {
        let mut config = OtaConfig::load();
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if self.lenient {
            config.strict_reads = false;
        }
        (config, self.firmware)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 0. Initialize logging
    tracing_subscriber::fmt::init();

    // 1. Resolve configuration: file defaults, then CLI overrides
    let cli = Cli::parse();
    let (config, firmware) = cli.into_config();

    // 2. Mirror transfer events on the terminal while bytes are in flight
    let (event_tx, mut event_rx) = mpsc::channel::<TransferEvent>(100);
    let reporter = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                TransferEvent::Status(msg) => info!("{}", msg),
                TransferEvent::Progress {
                    bytes_sent,
                    total_bytes,
                    speed,
                    ..
                } => {
                    info!("Progress: {}/{} bytes @ {}", bytes_sent, total_bytes, speed);
                }
                TransferEvent::Completed { bytes_sent } => {
                    info!("Transfer complete: {} bytes", bytes_sent);
                }
            }
        }
    });

    // 3. Run the push pipeline
    let result = send_file(&config, &firmware, event_tx).await;
    let _ = reporter.await;

    // 4. Report the outcome to the operator
    match result {
        Ok(_) => {
            println!("File {} sent successfully", firmware.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
