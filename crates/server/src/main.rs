mod gateway;
mod handlers;
mod validation;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use axum::{routing::get, Extension, Router, Server};
use common::{config::Config, logging};
use db::{ConnectOptions, Database, DatabaseConnection};
use gateway::{PaymentGateway, SslCommerz};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::new()?;

    logging::init(&config);

    let Some(server_config) = config.server.as_ref() else {
        return Err(anyhow::Error::msg("unable to load server config"));
    };

    let Some(payment_config) = config.payment.as_ref() else {
        return Err(anyhow::Error::msg("unable to load payment config"));
    };

    let gateway: Arc<dyn PaymentGateway> = Arc::new(SslCommerz::new(payment_config)?);

    info!("connecting to database");
    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .connect_timeout(config.database.timeout())
        .acquire_timeout(config.database.timeout())
        .sqlx_logging(false);

    let database = Arc::new(Database::connect(options).await?);
    let server = Server::bind(&server_config.address);

    info!(address = %server_config.address, "listening");
    let config = Arc::new(config);

    server
        .serve(app_router(database, config, gateway).into_make_service())
        .await?;

    Ok(())
}

fn app_router(
    database: Arc<DatabaseConnection>,
    config: Arc<Config>,
    gateway: Arc<dyn PaymentGateway>,
) -> Router {
    Router::new()
        .route("/", get(welcome))
        .merge(handlers::payment::routes())
        .nest("/users", handlers::users::routes())
        .nest("/slider", handlers::sliders::routes())
        .nest("/categories", handlers::categories::routes())
        .nest("/courses", handlers::courses::routes())
        .nest("/instructors", handlers::instructors::routes())
        .nest("/reviews", handlers::reviews::routes())
        .nest("/footer", handlers::footer::routes())
        .layer(Extension(config))
        .layer(Extension(gateway))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(database)
}

async fn welcome() -> &'static str {
    "Welcome to you in Online Course page"
}
