use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url_redirector::config::Config;
use url_redirector::server;

/// Layered path-to-URL redirect service.
///
/// Command-line flags override the corresponding environment variables.
#[derive(Parser)]
#[command(name = "url-redirector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML file mapping paths to URLs (overrides ROUTES_YAML)
    #[arg(long = "yml")]
    yaml: Option<PathBuf>,

    /// JSON file mapping paths to URLs (overrides ROUTES_JSON)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Bind address, e.g. 0.0.0.0:8080 (overrides LISTEN)
    #[arg(long)]
    listen: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(path) = self.yaml {
            config.yaml_path = Some(path);
        }
        if let Some(path) = self.json {
            config.json_path = Some(path);
        }
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Installs the global subscriber in text or JSON format.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
