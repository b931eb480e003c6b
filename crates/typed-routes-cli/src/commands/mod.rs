pub mod check;
pub mod generate;
pub mod list;
pub mod url;
pub mod watch;

use colored::Colorize;
use typed_routes::Config;

/// Prints what the generator is about to do
pub fn print_startup(config: &Config, mode: &str) {
    println!("{}", "Typed routes".green().bold());
    println!("  {} Pages directory: {}", "📁".cyan(), config.routing.pages_dir.display());
    println!("  {} Output: {}", "📄".cyan(), config.output.path.display());
    println!("  {} Mode: {}", "⚙".cyan(), mode);
    if !config.output.route_prefix.is_empty() {
        println!("  {} Route prefix: {}", "🔗".cyan(), config.output.route_prefix);
    }
    if config.routing.include_route_groups {
        println!("  {} Including route groups", "📂".cyan());
    }
    println!("{}", "─".repeat(50));
}
