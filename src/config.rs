//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Dummy review site - a file-backed review API used as the target of the
/// review-automation pipeline tests.
#[derive(Parser, Debug, Clone)]
#[command(name = "reviewsite")]
#[command(about = "File-backed customer review site with a small REST API")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,

    /// Path to the JSON file holding the review collection
    #[arg(long, env = "DATA_FILE", default_value = "reviews_data.json")]
    pub data_file: PathBuf,

    /// Directory holding the static review page
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
