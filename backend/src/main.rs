//! Phonebook entry-point: loads configuration, installs logging and serves
//! the REST API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use phonebook::domain::SharedDirectory;
use phonebook::inbound::http::health::HealthState;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_args(std::env::args_os())?;
    let config = ServerConfig::try_from(&settings)?;
    info!(bind_addr = %config.bind_addr(), "starting phonebook server");

    let directory = SharedDirectory::new();
    let health_state = web::Data::new(HealthState::new(directory.clone()));
    create_server(health_state, directory, config)?.await
}
