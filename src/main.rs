mod config;
mod core;
mod error;
mod geocoders;
mod handlers;
mod models;
mod persisters;
#[cfg(test)]
mod testing;

use actix_web::{middleware::Logger, web::Data};
use anyhow::Context;
use config::Config;
use geocoders::GoogleGeocoder;
use persisters::MongoPersister;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cfg = Config::from_env()?;

    let geocoder = GoogleGeocoder::new(cfg.geocoding.url.clone(), cfg.geocoding.api_key.clone(), cfg.geocoding.timeout)
        .context("failed to build geocoding client")?;
    let client = mongodb::Client::with_options(
        mongodb::options::ClientOptions::parse(&cfg.db.uri)
            .await
            .context("invalid MongoDB connection string")?,
    )
    .context("failed to create MongoDB client")?;
    let persister = MongoPersister::new(client.database(&cfg.db.database), &cfg.db.collection);

    let geocoder = Data::new(geocoder);
    let persister = Data::new(persister);
    log::info!("listening on {}", cfg.listen_addr);
    actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .wrap(Logger::default())
            .app_data(geocoder.clone())
            .app_data(persister.clone())
            .configure(handlers::routes::<GoogleGeocoder, MongoPersister>)
    })
    .bind(&cfg.listen_addr)
    .with_context(|| format!("failed to bind {}", cfg.listen_addr))?
    .run()
    .await?;
    Ok(())
}
