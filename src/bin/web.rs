//! Single binary web server exposing the tournament arena as a JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set ARENA_SEED_DEMO=false to start with an empty arena.

use actix_web::{web::Data, App, HttpServer};
use tournament_arena::{api, Arena, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let arena = Data::new(Arena::new());
    if config.seed_demo {
        match arena.seed_demo() {
            Ok(()) => log::info!("Seeded {} demo tournament(s)", arena.len()),
            Err(e) => log::warn!("Could not seed demo tournaments: {}", e),
        }
    }

    log::info!("Starting server at http://{}:{}", config.host, config.port);
    HttpServer::new(move || App::new().app_data(arena.clone()).configure(api::configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
