//! Terminal client entry point.
mod app;
mod config;
mod input;

use anyhow::Result;
use app::CliApp;
use config::CliConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // stdout belongs to the game text, so logs go to a file only
    setup_logging(&config.session_id, config.log_dir.as_deref())?;

    CliApp::builder(config).build()?.run()
}

/// Setup logging to a per-session file
fn setup_logging(
    session_id: &Option<String>,
    log_root: Option<&std::path::Path>,
) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let log_dir = log_root
        .map(std::path::Path::to_path_buf)
        .unwrap_or_else(get_log_directory);

    // Create session ID if not provided
    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "lineage.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/lineage.log", session_log_dir.display());

    Ok(())
}

/// Get the platform-specific log directory
fn get_log_directory() -> std::path::PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut path = std::path::PathBuf::from(home);
            path.push("Library");
            path.push("Caches");
            path.push("lineage");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            let mut path = std::path::PathBuf::from(xdg_cache);
            path.push("lineage");
            path.push("logs");
            return path;
        } else if let Some(home) = std::env::var_os("HOME") {
            let mut path = std::path::PathBuf::from(home);
            path.push(".cache");
            path.push("lineage");
            path.push("logs");
            return path;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            let mut path = std::path::PathBuf::from(local_appdata);
            path.push("lineage");
            path.push("logs");
            return path;
        }
    }

    // Fallback
    std::path::PathBuf::from("/tmp/lineage/logs")
}
