use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::sync::Arc;

use token_balance_api::{
    chain::{create_provider, Erc20Client, TokenReader},
    config::{Config, DEFAULT_CONFIG_PATH},
    routes::configure_routes,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Overrides `server.log_level` from the config file
    #[arg(long)]
    log_level: Option<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

fn to_io_error(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 1. Load .env, parse command line arguments and configuration
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = Config::load(&args.config).map_err(to_io_error)?;

    // 2. Setup logging, CLI level first, then the configured one
    let log_level = config.server.level_filter(args.log_level.as_deref());
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level.to_string())).init();

    config.chain.validate().map_err(to_io_error)?;

    info!("Starting token balance API...");
    info!("Configuration loaded: {:?}", config);

    // 3. Connect the token contract reader
    let token_address = config.chain.token_address().map_err(to_io_error)?;
    let provider = create_provider(&config.chain.rpcs).map_err(to_io_error)?;
    let reader: Arc<dyn TokenReader> = Arc::new(Erc20Client::new(provider, token_address));

    info!(
        "Serving token {} via {} RPC endpoint(s)",
        token_address.to_checksum(None),
        config.chain.rpcs.len()
    );

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server will be available at http://{}", bind_addr);

    let config = Arc::new(config);

    HttpServer::new(move || {
        let allowed_origins = config.cors.allowed_origins.clone();

        let cors = Cors::default().allowed_origin_fn(move |origin, _req_head| {
            let origin_str = match origin.to_str() {
                Ok(s) => s,
                Err(_) => return false,
            };
            allowed_origins.iter().any(|allowed| origin_str == allowed)
        });

        let methods: Vec<actix_web::http::Method> = config
            .cors
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();

        let cors = cors
            .allowed_methods(methods)
            .allowed_headers(config.cors.allowed_headers.clone())
            .max_age(3600);

        let cors = if config.cors.supports_credentials {
            cors.supports_credentials()
        } else {
            cors
        };

        App::new()
            .app_data(web::Data::new(reader.clone()))
            .app_data(web::Data::new(config.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
