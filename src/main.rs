mod common;
mod config;
mod session;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use ui::MessengerApp;

#[derive(Parser)]
#[command(name = "rust_messenger", version, about = "Mock desktop messenger")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Messenger",
        options,
        Box::new(move |cc| Ok(Box::new(MessengerApp::new(cc, app_config)))),
    )
}
