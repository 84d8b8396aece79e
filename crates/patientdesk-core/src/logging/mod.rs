use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are emitted at the default level.
const LOG_TARGETS: [&str; 2] = ["patientdesk_core", "patientdesk_ui"];

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
/// `RUST_LOG` directives are layered on top.
pub fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "info" };

    let mut filter = EnvFilter::from_default_env();
    for target in LOG_TARGETS {
        match format!("{target}={level}").parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Warning: invalid log directive for {target}: {e}"),
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directives_parse() {
        for target in LOG_TARGETS {
            for level in ["error", "info"] {
                let parsed: Result<tracing_subscriber::filter::Directive, _> =
                    format!("{target}={level}").parse();
                assert!(parsed.is_ok(), "directive for {target} should parse");
            }
        }
    }
}
