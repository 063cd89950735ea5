mod audio;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config;

#[derive(Parser)]
#[command(name = "drumboy", about = "Nine-pad terminal drum machine")]
struct Args {
    /// Directory holding the sample files (overrides config and env)
    #[arg(short, long)]
    sample_dir: Option<String>,

    /// Run without audio output
    #[arg(long)]
    silent: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to drumboy.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("drumboy.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Drumboy starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("drumboy: {e}");
            std::process::exit(1);
        }
    };
    let resolved = match config::resolve(&file_config, args.sample_dir.as_deref(), args.silent) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("drumboy: {e}");
            std::process::exit(1);
        }
    };

    tui::run(resolved)
}
