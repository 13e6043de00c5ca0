use std::{io::Error, sync::Arc};

use poem::{Server, listener::TcpListener};
use sqlx::postgres::PgPoolOptions;
use tokio::main;

use daily_diet::{
    config::Config,
    infrastructure::repositories::postgres::{
        PostgresMealRepository, PostgresUserRepository, run_migrations,
    },
    presentation::http::{app, endpoints::root::ApiState},
    telemetry,
};

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;
    telemetry::init_tracing();

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(Error::other)?;
    run_migrations(&pool).await.map_err(Error::other)?;

    let state = Arc::new(ApiState::new(
        PostgresUserRepository::new(pool.clone()),
        PostgresMealRepository::new(pool),
    ));

    let server_url = config.server_url();
    tracing::info!("Starting server at {}", server_url);

    Server::new(TcpListener::bind(config.bind_address()))
        .run(app(state, server_url))
        .await
}
