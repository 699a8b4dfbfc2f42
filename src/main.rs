use std::io;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use hotel_property_service::{db, routes, AppState, Config};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|err| {
        log::error!("Error while loading config: {err}");
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;
    log::info!("Configuration loaded for {} environment", config.server.env);

    log::info!("Connecting to database...");
    let pool = db::connect(&config.database).await.map_err(io::Error::other)?;

    if config.database.run_migrations {
        db::migrate(&pool).await.map_err(io::Error::other)?;
    }

    let state = web::Data::new(AppState::from_pool(pool, config.server.request_timeout));
    let bind = (config.server.host.clone(), config.server.port);

    log::info!("Starting server at http://{}:{}{}", bind.0, bind.1, routes::API_PREFIX);
    log::info!("API docs at http://{}:{}/swagger-ui/", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
