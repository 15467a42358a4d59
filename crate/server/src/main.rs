use dotenvy::dotenv;
use medbase_server::{
    config::{ClapConfig, ServerParams},
    result::MResult,
    start_server::start_api_server,
    telemetry::initialize_telemetry,
};
use tracing::debug;

/// The main entrypoint of the program.
///
/// Sets up the environment defaults and logging, parses the configuration
/// and starts the API server.
#[tokio::main]
async fn main() -> MResult<()> {
    // Set up environment variables and logging options
    if std::env::var("RUST_BACKTRACE").is_err() {
        unsafe {
            std::env::set_var("RUST_BACKTRACE", "full");
        }
    }
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var(
                "RUST_LOG",
                "info,medbase_server=info,actix_web=info,sqlx::query=error",
            );
        }
    }

    // Load variables from a .env file
    dotenv().ok();

    let clap_config = ClapConfig::load_from_file()?;

    initialize_telemetry(&clap_config)?;

    debug!("Command line config: {clap_config:#?}");

    // Resolve the runtime parameters from the command line arguments
    let server_params = ServerParams::try_from(clap_config)?;

    Box::pin(start_api_server(server_params)).await
}
