pub use error::ApiError;
pub use error::Error;
mod command;
mod conf;
mod dataset;
mod db;
mod error;
mod feedback;
mod rest;
mod server;
#[cfg(test)]
mod test;
mod view;
use std::env;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::CLI("No command passed".into()))?,
    };

    match command.as_str() {
        "server" => command::server::run().await?,
        "report" => command::report::run().await?,
        first_arg => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
