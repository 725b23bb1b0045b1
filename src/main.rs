//! volunteerhub main entrypoint.

use tracing_subscriber::EnvFilter;
use volunteerhub::run;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        volunteerhub::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
