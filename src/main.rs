mod books;
mod catalog;
mod core;
mod utils;

use std::net::SocketAddr;

use crate::catalog::controller::books_routes;
use crate::catalog::factory;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::mongo::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let service = factory::create_catalog_service(&config, RepositoryStore::MongoDb).await?;
    let app = books_routes(AppState::new(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("servidor en el puerto {}...", config.http_port);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
