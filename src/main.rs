use clap::Parser;
use ice_booking::Role;
use ice_booking::core::config::{self, BookingConfig, CliOverrides};
use ice_booking::tui;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ice-booking", about = "Terminal car rental booking")]
struct Args {
    /// Role pre-selected on the login screen
    #[arg(short, long, value_enum)]
    role: Option<Role>,

    /// Config file to read instead of ~/.ice-booking/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start without the two demo cars
    #[arg(long)]
    no_seed: bool,

    /// Currency symbol shown before amounts
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to ice-booking.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("ice-booking.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("ICE Car Booking starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("Ignoring config: {e}");
            BookingConfig::default()
        }
    };
    let overrides = CliOverrides {
        role: args.role,
        currency: args.currency,
        no_seed: args.no_seed,
    };
    let resolved = config::resolve(&file_config, &overrides);

    tui::run(resolved)
}
