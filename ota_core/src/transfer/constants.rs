/// Default device address firmware is pushed to
pub const DEFAULT_HOST: &str = "192.168.1.205";

/// Default TCP port the device's OTA service listens on
pub const DEFAULT_PORT: u16 = 3333;

/// Bytes per read/write cycle (1KB)
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Emit a progress event at most once per this many bytes (256KB)
pub const PROGRESS_INTERVAL_BYTES: u64 = 256 * 1024;
