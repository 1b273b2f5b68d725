mod config;
mod error;
mod export;
mod routes;
mod session;
mod simulation;
mod store;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::{ServerConfig, SimulationConfig};
use routes::configure_routes;
use session::{CLIENT_ID_HEADER, ClientIdMiddleware};
use simulation::Simulator;
use store::image_store::ImageStore;

fn startup_error(e: config::ConfigError) -> std::io::Error {
    log::error!("{}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = ServerConfig::from_env().map_err(startup_error)?;
    let simulation = SimulationConfig::load(&server_config.simulation_path).map_err(startup_error)?;
    log::info!(
        "Loaded simulation config v{} (latency scale {}, store capacity {})",
        simulation.version,
        simulation.latency.scale,
        simulation.uploads.store_capacity
    );

    let store = ImageStore::new(
        simulation.uploads.store_capacity,
        simulation.uploads.max_bytes,
    );
    let simulator = Simulator::new(simulation.latency.clone());
    let static_dir = server_config.static_dir.clone();
    let max_bytes = simulation.uploads.max_bytes;

    let bind_address = server_config.bind_address();
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                        actix_web::http::header::HeaderName::from_static(CLIENT_ID_HEADER),
                    ])
                    .expose_headers(vec![
                        actix_web::http::header::CONTENT_DISPOSITION,
                        actix_web::http::header::HeaderName::from_static(CLIENT_ID_HEADER),
                    ])
                    .max_age(3600),
            )
            .wrap(ClientIdMiddleware)
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(simulator.clone()))
            .app_data(web::Data::new(simulation.clone()))
            .configure(|cfg| configure_routes(cfg, static_dir.clone(), max_bytes))
    })
    .bind(&bind_address)?
    .run()
    .await
}
