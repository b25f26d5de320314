use std::process::ExitCode;

use tracing::error;

use signup_backend::{Config, api, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = api::server::start_server(&config).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
