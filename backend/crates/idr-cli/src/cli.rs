use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "idr")]
#[command(about = "Identity directory client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server host name or address, or a full http:// URL
    #[arg(long, short = 's', global = true, default_value = "127.0.0.1")]
    pub server: String,

    /// Server port (ignored when --server is a URL)
    #[arg(long, short = 'n', global = true, default_value_t = idr_config::DEFAULT_PORT)]
    pub numport: u16,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    pub fn base_url(&self) -> String {
        if self.server.starts_with("http://") || self.server.starts_with("https://") {
            self.server.clone()
        } else {
            format!("http://{}:{}", self.server, self.numport)
        }
    }
}
