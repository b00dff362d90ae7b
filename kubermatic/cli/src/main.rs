//! kkp - query a Kubermatic installation from the command line

use std::error::Error;
use std::io;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use kubermatic_client::KubermaticApi;
use kubermatic_client::admin::ListSeedsParams;
use kubermatic_client::ipam_pool::ListIpamPoolsParams;
use kubermatic_client::project::ListProjectsParams;
use kubermatic_client::users::GetCurrentUserParams;
use kubermatic_runtime::{BearerToken, Formats, HttpTransport, TransportConfig};
use serde::Serialize;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kkp")]
#[command(about = "Query the Kubermatic Kubernetes Platform API", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// API host, optionally with a port [env: KUBERMATIC_HOST]
    #[arg(long, global = true, value_name = "HOST")]
    host: Option<String>,

    /// Path prefix in front of every operation [env: KUBERMATIC_BASE_PATH]
    #[arg(long, global = true, value_name = "PATH")]
    base_path: Option<String>,

    /// `http` or `https` [env: KUBERMATIC_SCHEMES]
    #[arg(long, global = true, value_name = "SCHEME")]
    scheme: Option<String>,

    /// Bearer token [env: KUBERMATIC_TOKEN or KKP_TOKEN]
    #[arg(long, global = true, value_name = "TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List seeds (administrators only)
    Seeds,

    /// List projects
    Projects {
        /// Every project on the installation, not just your own (administrators only)
        #[arg(long)]
        all: bool,
    },

    /// Show the user the token belongs to
    Me,

    /// List IPAM pools (administrators only)
    IpamPools,
}

/// Filter used when `RUST_LOG` is unset; each `-v` opens up the client crates first.
fn default_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,kubermatic_runtime=info,kubermatic_cli=info",
        2 => "info,kubermatic_runtime=debug,kubermatic_cli=debug",
        _ => "debug,kubermatic_runtime=trace,kubermatic_cli=trace",
    }
}

/// Logs go to stderr so stdout stays parseable JSON.
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let json_layer = json.then(|| fmt::layer().json().with_writer(io::stderr));
    let text_layer = (!json).then(|| {
        fmt::layer()
            .compact()
            .with_file(verbose >= 3)
            .with_line_number(verbose >= 3)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

/// Environment first, then whatever the flags override.
fn transport_config(cli: &Cli) -> TransportConfig {
    let mut config = TransportConfig::from_env();
    if let Some(host) = &cli.host {
        config = config.with_host(host.as_str());
    }
    if let Some(base_path) = &cli.base_path {
        config = config.with_base_path(base_path.as_str());
    }
    if let Some(scheme) = &cli.scheme {
        config = config.with_schemes([scheme.to_ascii_lowercase()]);
    }
    config
}

fn build_api(cli: &Cli) -> Result<KubermaticApi, Box<dyn Error>> {
    let config = transport_config(cli);
    let token = match &cli.token {
        Some(token) => Some(BearerToken::new(token.as_str())),
        None => BearerToken::from_env().ok(),
    };

    let mut builder = HttpTransport::builder(config);
    match token {
        Some(token) => builder = builder.default_auth(Arc::new(token)),
        None => tracing::warn!("no token given, calls will be unauthenticated"),
    }
    let transport = builder.build()?;
    Ok(KubermaticApi::new(Arc::new(transport), Arc::new(Formats::default())))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let api = build_api(&cli)?;

    match cli.command {
        Commands::Seeds => {
            let seeds = api.admin().list_seeds(ListSeedsParams::new(), None).await?;
            tracing::info!(count = seeds.len(), "listed seeds");
            print_json(&seeds)
        }
        Commands::Projects { all } => {
            let params = ListProjectsParams::new().with_display_all(all);
            let projects = api.project().list_projects(params, None).await?;
            tracing::info!(count = projects.len(), all, "listed projects");
            print_json(&projects)
        }
        Commands::Me => {
            let user = api
                .users()
                .get_current_user(GetCurrentUserParams::new(), None)
                .await?;
            print_json(&user)
        }
        Commands::IpamPools => {
            let pools = api
                .ipam_pool()
                .list_ipam_pools(ListIpamPoolsParams::new(), None)
                .await?;
            tracing::info!(count = pools.len(), "listed IPAM pools");
            print_json(&pools)
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    if let Err(e) = run(cli).await {
        eprintln!("kkp: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_verbosity_is_a_valid_filter() {
        for verbose in 0..=4 {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
        assert_eq!(default_directives(7), default_directives(3));
    }

    #[test]
    fn test_flags_override_environment_defaults() {
        let cli = Cli::try_parse_from([
            "kkp",
            "-vv",
            "--host",
            "kkp.example.com:8443",
            "--base-path",
            "/kkp",
            "--scheme",
            "HTTP",
            "projects",
            "--all",
        ])
        .unwrap();
        assert_eq!(cli.log_verbosity, 2);
        assert!(matches!(cli.command, Commands::Projects { all: true }));

        let config = transport_config(&cli);
        assert_eq!(config.host(), "kkp.example.com:8443");
        assert_eq!(config.schemes(), &["http".to_string()]);
        assert_eq!(
            config.base_url("http").unwrap().as_str(),
            "http://kkp.example.com:8443/kkp/"
        );
    }
}
