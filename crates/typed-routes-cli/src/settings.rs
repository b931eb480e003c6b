use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use typed_routes::config::{Config, CONFIG_FILE};

use crate::RouteArgs;

/// Config file values overridden by command-line flags, paths made absolute
pub fn resolve(args: &RouteArgs, config_path: Option<&Path>) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.join(CONFIG_FILE));

    let config = Config::load(&config_path)?;
    Ok(apply_overrides(config, args).resolve_paths(&cwd))
}

fn apply_overrides(mut config: Config, args: &RouteArgs) -> Config {
    if let Some(pages_dir) = &args.pages_dir {
        config.routing.pages_dir = pages_dir.clone();
    }
    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }
    if let Some(prefix) = &args.prefix {
        config.output.route_prefix = prefix.clone();
    }
    if args.include_route_groups {
        config.routing.include_route_groups = true;
    }
    if let Some(format) = args.format {
        config.output.format = Some(format);
    }
    config
}
