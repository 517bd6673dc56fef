use clap::Parser;
use ghsearch::core::config;
use ghsearch::{github, headless, tui};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io::Write;

#[derive(Parser)]
#[command(name = "ghsearch", about = "Search GitHub repositories from the terminal", version)]
struct Args {
    /// Initial text for the search bar
    #[arg(short, long)]
    query: Option<String>,

    /// GitHub API base URL (GitHub Enterprise, local mocks)
    #[arg(long)]
    api_url: Option<String>,

    /// Print results for QUERY to stdout instead of starting the TUI
    #[arg(short, long, value_name = "QUERY")]
    print: Option<String>,

    /// Number of pages to fetch with --print
    #[arg(
        long,
        default_value_t = 1,
        requires = "print",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pages: u32,
}

fn init_logging(config: &config::ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    // File logger only: the terminal belongs to the UI
    match File::create(&config.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "Logging disabled: cannot create {}: {}",
            config.log_file.display(),
            e
        ),
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(&file_config, args.api_url.as_deref());

    init_logging(&resolved);
    log::info!("ghsearch starting up (api: {})", resolved.api_url);
    // The config was read before the logger existed
    match config::config_path() {
        Some(path) => log::info!("Config file: {}", path.display()),
        None => log::warn!("No home directory, running on built-in defaults"),
    }
    log::debug!("Resolved config: {:?}", resolved);

    if let Some(query) = args.print {
        let provider = github::build_provider(&resolved);
        let state = headless::collect(provider, &query, args.pages).await;
        let mut out = std::io::stdout().lock();
        for name in &state.repos {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    tui::run(&resolved, args.query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_defaults_to_one() {
        let args = Args::try_parse_from(["ghsearch", "--print", "rust"]).unwrap();
        assert_eq!(args.pages, 1);
        assert_eq!(args.print.as_deref(), Some("rust"));
    }

    #[test]
    fn test_zero_pages_rejected() {
        let result = Args::try_parse_from(["ghsearch", "--print", "rust", "--pages", "0"]);
        assert!(result.is_err());

        let args = Args::try_parse_from(["ghsearch", "--print", "rust", "--pages", "3"]).unwrap();
        assert_eq!(args.pages, 3);
    }

    #[test]
    fn test_pages_requires_print() {
        assert!(Args::try_parse_from(["ghsearch", "--pages", "2"]).is_err());
    }
}
