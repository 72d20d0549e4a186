use clap::Parser;
use cloud_ip_ranges::cli::Cli;
use cloud_ip_ranges::logging;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    dotenv::dotenv().ok();
    logging::init(cli.verbose)?;
    //
    log::info!("#Start main()");

    cloud_ip_ranges::run(&cli).await?;

    Ok(())
}
