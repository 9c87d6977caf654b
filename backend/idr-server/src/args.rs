use idr_config::Config;

use clap::Parser;

/// Command-line flags. These win over config.toml and IDR_* variables.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "idr-server")]
#[command(about = "Identity directory server")]
#[command(version)]
pub struct ServerArgs {
    /// Port to listen on
    #[arg(long = "numport", short = 'n')]
    pub port: Option<u16>,

    /// Log every request at debug level
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl ServerArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}
