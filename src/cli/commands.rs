use clap::Parser;

#[derive(Parser)]
#[command(name = "tk", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a single-screen to-do list"), version)]
pub struct Cli {
    /// Run against a different data directory (default: ~/.tick)
    #[arg(short = 'C', long = "data-dir")]
    pub data_dir: Option<String>,
}
