use std::process::ExitCode;

use crate::{
    configuration::Configuration, configuration_handler::ConfigurationHandler, http::create_app,
    local_timeslots::LocalTimeslots,
};
use tracing::{error, info};

mod backend;
mod configuration;
mod configuration_handler;
mod error;
mod http;
mod local_timeslots;
mod logging;
#[cfg(test)]
mod testutils;
mod types;

#[tokio::main]
async fn main() -> ExitCode {
    // Only feeds the env fallbacks of the command line arguments.
    dotenvy::dotenv().ok();
    let configuration = ConfigurationHandler::parse_arguments();

    if let Err(err) = logging::init(configuration.log_file().as_deref()) {
        eprintln!("Failed to set up logging: {err}");
        return ExitCode::FAILURE;
    }

    match run(configuration).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(?err, "Timeslot server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run<C: Configuration>(configuration: C) -> std::io::Result<()> {
    let address = format!("{}:{}", configuration.host(), configuration.port());
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, "Timeslot server listening");

    let app = create_app(LocalTimeslots::default());
    axum::serve(listener, app).await
}
