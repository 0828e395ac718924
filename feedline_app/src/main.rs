use feedline_app::{app::App, command, config::Config};

use clap::Parser;
use entrait::Impl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::parse();
    let app = Impl::new(App::new(&config)?);

    let mut stdout = std::io::stdout().lock();
    command::run(&app, config.command, config.utc_offset.0, &mut stdout).await?;

    Ok(())
}
