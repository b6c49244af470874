mod config;
mod error;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::fs;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();
    error::set_production(config.production);

    fs::create_dir_all(&config.uploads_dir)?;
    let state = AppState::from_config(&config);
    let url = config.local_url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open browser at {}: {}", url, e);
            }
        });
    }

    info!(
        "Ad board running at {} (data: {}, uploads: {})",
        url,
        state.store.path().display(),
        config.uploads_dir.display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(services::configure(state.clone()))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
