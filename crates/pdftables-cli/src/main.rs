mod cli;
mod extract_cmd;
mod page_range;

use clap::Parser;
use cli::Cli;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(code) = extract_cmd::run(&cli) {
        std::process::exit(code);
    }
}

/// Log to stderr.
///
/// Without `-v`, `RUST_LOG` alone sets the filter (warn when unset). Each
/// `-v` raises the global level on top of any `RUST_LOG` directives.
fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(verbose))
        .init();
}

fn env_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => {
            return EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::WARN.into()));
        }
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    EnvFilter::from_default_env().add_directive(level.into())
}
