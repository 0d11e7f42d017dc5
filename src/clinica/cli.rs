use super::config::Config;
use clap::Parser;

use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A small veterinary clinic REST API, owners and their animals",
    help_template = r#"
{name} v{version}
{about}

{usage-heading} {usage}

{all-args}
"#
)]
pub struct Cli {
    #[clap(short, long, default_value = "clinica.toml")]
    pub config: PathBuf,
    #[clap(short, long, help = "Port to listen on")]
    pub port: Option<u16>,
    #[clap(short, long, help = "IP to listen on")]
    pub ip: Option<String>,
}

pub fn init() -> Config {
    let cli = Cli::parse();

    let mut config = Config::load_from_file(&cli.config)
        .unwrap_or_else(|e| panic!("failed to load config: {e}"));

    if let Some(port) = cli.port {
        config.network.port = port;
        info!("port: {}", config.network.port);
    }

    if let Some(ip) = cli.ip {
        config.network.ip = ip;
        info!("ip: {}", config.network.ip);
    }

    config
}
