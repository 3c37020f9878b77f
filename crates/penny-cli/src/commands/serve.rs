//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use penny_core::config::ServerSettings;

use super::{open_db, seed};

pub async fn cmd_serve(db_path: &Path, settings: &ServerSettings, no_encrypt: bool) -> Result<()> {
    println!("🚀 Starting Penny web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", settings.host, settings.port);
    if let Some(dir) = &settings.static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !settings.allowed_origins.is_empty() {
        println!("   🌐 CORS origins: {}", settings.allowed_origins.join(", "));
    }
    if no_encrypt {
        println!("   ⚠️  Encryption DISABLED (--no-encrypt)");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path, no_encrypt)?;
    seed(&db)?;

    let config = penny_server::ServerConfig {
        allowed_origins: settings.allowed_origins.clone(),
    };

    let static_dir = settings
        .static_dir
        .as_deref()
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;

    penny_server::serve_with_config(db, &settings.host, settings.port, static_dir, config).await?;

    Ok(())
}
