use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Result;

use calm_mind::{server, SessionStore, Settings};

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    log::info!(
        "Engine thresholds: urgent >= {}, weak < {}, high intensity > {}",
        settings.engine.urgent_score_threshold,
        settings.engine.weak_signal_threshold,
        settings.engine.high_intensity_threshold
    );

    let store = web::Data::new(SessionStore::with_ttl(
        settings.engine.clone(),
        Duration::from_secs(settings.server.session_ttl_secs),
    ));
    let host = settings.server.host.clone();
    let port = settings.server.port;

    log::info!("Starting server at http://{}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(server::configure)
    })
    .bind((host, port))?
    .run()
    .await?;
    Ok(())
}
