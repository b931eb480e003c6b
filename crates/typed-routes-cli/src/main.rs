mod commands;
mod settings;
mod watch;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use typed_routes::OutputFormat;

#[derive(Parser)]
#[command(name = "typed-routes")]
#[command(version, about = "Typed routes - route catalogs for file-system routed apps", long_about = None)]
struct Cli {
    /// Config file (default: ./typed-routes.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log scanning details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options that override the config file
#[derive(Args, Debug, Clone, Default)]
pub struct RouteArgs {
    /// Pages directory (default: src/app)
    #[arg(short, long)]
    pub pages_dir: Option<PathBuf>,

    /// Output file (default: typed-routes/generated/routes.ts)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prefix prepended to every emitted route
    #[arg(long)]
    pub prefix: Option<String>,

    /// Keep (group) segments in routes
    #[arg(long)]
    pub include_route_groups: bool,

    /// Output format: typescript or rust (default: from output extension)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan pages and write route definitions once (default)
    Generate {
        #[command(flatten)]
        args: RouteArgs,
    },

    /// Generate, then regenerate whenever pages are added or removed
    Watch {
        #[command(flatten)]
        args: RouteArgs,
    },

    /// Print the discovered routes without writing anything
    List {
        #[command(flatten)]
        args: RouteArgs,
    },

    /// Check whether paths match a discovered route
    Check {
        /// Paths to check, e.g. /user/123
        #[arg(required = true)]
        paths: Vec<String>,

        #[command(flatten)]
        args: RouteArgs,
    },

    /// Build a URL from a route template
    Url {
        /// Route template, e.g. /user/[id]
        template: String,

        /// Parameter value as name=value
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Search query entry as key=value
        #[arg(long = "search", value_parser = parse_key_val)]
        search: Vec<(String, String)>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{s}`"))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref();

    // Execute command
    match cli.command.unwrap_or(Commands::Generate { args: RouteArgs::default() }) {
        Commands::Generate { args } => {
            commands::generate::execute(&settings::resolve(&args, config_path)?)?;
        }
        Commands::Watch { args } => {
            commands::watch::execute(settings::resolve(&args, config_path)?)?;
        }
        Commands::List { args } => {
            commands::list::execute(&settings::resolve(&args, config_path)?)?;
        }
        Commands::Check { paths, args } => {
            commands::check::execute(&settings::resolve(&args, config_path)?, &paths)?;
        }
        Commands::Url {
            template,
            params,
            search,
        } => {
            commands::url::execute(&template, params, search)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("id=123"),
            Ok(("id".to_string(), "123".to_string()))
        );
        assert_eq!(
            parse_key_val("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_val("id").is_err());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::try_parse_from([
            "typed-routes",
            "generate",
            "-p",
            "app",
            "--prefix",
            "/v1",
            "--include-route-groups",
            "--format",
            "rust",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Generate { args }) => {
                assert_eq!(args.pages_dir, Some(PathBuf::from("app")));
                assert_eq!(args.prefix.as_deref(), Some("/v1"));
                assert!(args.include_route_groups);
                assert_eq!(args.format, Some(OutputFormat::Rust));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_cli_defaults_to_generate() {
        let cli = Cli::try_parse_from(["typed-routes"]).unwrap();
        assert!(cli.command.is_none());
    }
}
