use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "lambda_showcase=debug"
    } else {
        "lambda_showcase=warn"
    }
}

/// `RUST_LOG` wins over the `--verbose` default.
pub fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Diagnostics go to stderr; stdout carries only demonstration output.
pub fn init_cli_logger(verbose: bool) {
    // Captured stderr (pipes, test harnesses) gets plain text.
    let ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbose() {
        assert_eq!(default_directive(true), "lambda_showcase=debug");
        assert_eq!(default_directive(false), "lambda_showcase=warn");
    }

    #[test]
    fn test_default_directives_parse() {
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
