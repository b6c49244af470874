use clap::Parser;
use std::path::PathBuf;

/// 50 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Ad board server.
///
/// Every flag can also be set through the environment variable shown in `--help`.
#[derive(Debug, Clone, Parser)]
#[command(name = "ad-board", version, about)]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "AD_BOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// JSON document holding the ads.
    #[arg(long, env = "AD_BOARD_DATA_FILE", default_value = "ads.json")]
    pub data_file: PathBuf,

    /// Directory receiving uploaded videos, served under `/uploads`.
    #[arg(long, env = "AD_BOARD_UPLOADS_DIR", default_value = "uploads")]
    pub uploads_dir: PathBuf,

    /// Maximum size of a single uploaded file, in bytes.
    #[arg(long, env = "AD_BOARD_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: u64,

    /// Prefix for the URLs of uploaded files, e.g. `http://localhost:3001`.
    /// Empty means URLs are relative (`/uploads/<file>`).
    #[arg(long, env = "AD_BOARD_PUBLIC_BASE_URL", default_value = "")]
    pub public_base_url: String,

    /// Hide internal error details from API responses.
    #[arg(long, env = "AD_BOARD_PRODUCTION")]
    pub production: bool,

    /// Open the board in the default browser once the server is up.
    #[arg(long, env = "AD_BOARD_OPEN_BROWSER")]
    pub open_browser: bool,
}

impl Config {
    pub fn local_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
