use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::{Config, Environment, File};
use dotenvy::dotenv;

use game_reviews::db::{establish_connection_pool, run_migrations};
use game_reviews::models::config::ServerConfig;
use game_reviews::repository::DieselRepository;
use game_reviews::routes;
use game_reviews::seed::{seed, test_data};

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = load_config().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to establish database connection pool: {e}");
        io::Error::other(e)
    })?;

    {
        let mut conn = pool.get().map_err(io::Error::other)?;
        run_migrations(&mut conn).map_err(|e| {
            log::error!("Failed to run migrations: {e}");
            io::Error::other(e)
        })?;

        if server_config.seed_on_start {
            test_data()
                .and_then(|data| seed(&mut conn, &data))
                .map_err(|e| {
                    log::error!("Failed to seed database: {e}");
                    io::Error::other(e)
                })?;
        }
    }

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Listening on http://{}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
            .default_service(web::to(routes::invalid_path))
    })
    .bind(bind_address)?
    .run()
    .await
}
