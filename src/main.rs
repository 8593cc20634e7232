use anyhow::Context;

// ───── Current Crate Imports ────────────────────────────────────────────── //

use hello_api::configuration::Settings;
use hello_api::domain::Uptime;
use hello_api::startup::Application;
use hello_api::telemetry::{get_subscriber, init_subscriber};

// ───── Body ─────────────────────────────────────────────────────────────── //

/// Errors are returned from `main`, so they land on stderr and the process
/// exits with a non-zero code.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let uptime = Uptime::start();

    let subscriber = get_subscriber("info", std::io::stdout);
    init_subscriber(subscriber).context("Failed to set up tracing")?;

    let config =
        Settings::load_configuration().context("Failed to read configuration")?;

    // `StartupError` formats its own cause chain on `Debug`.
    let application = Application::build_with_uptime(config, uptime)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    application
        .run_until_stopped()
        .await
        .context("Server error")?;

    Ok(())
}
