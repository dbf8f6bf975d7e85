//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `docscaff-core`
//! only *emits* spans and events, it never touches subscribers.
//!
//! Log lines go to **stdout**, without timestamp or target:
//!
//! ```text
//!  INFO Directory ensured: /tmp/proj/docs
//! ERROR Failed to write file /tmp/proj/mkdocs.yml: Is a directory (os error 21)
//! ```
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level                         |
//! |----------|--------------------------------------|
//! | (none)   | `logging.level` from config (INFO)   |
//! | `-v`     | DEBUG                                |
//! | `-vv`    | TRACE                                |
//! | `--quiet`| ERROR                                |
//!
//! `RUST_LOG` overrides all of the above if set.
//!
//! Spans are emitted at DEBUG, so the span chain only prefixes events
//! under `-v` and `-vv`.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Crates whose events are shown.
const CRATES: [&str; 3] = ["docscaff", "docscaff_core", "docscaff_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<()> {
    let level = derive_level(args, &config.logging.level);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
        EnvFilter::new(directives.join(","))
    });

    let use_ansi = !args.no_color && !config.output.no_color && std::io::stdout().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level<'a>(args: &GlobalArgs, configured: &'a str) -> &'a str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(&args_with(0, true), "info"), "error");
    }

    #[test]
    fn level_default_uses_config() {
        assert_eq!(derive_level(&args_with(0, false), "info"), "info");
        assert_eq!(derive_level(&args_with(0, false), "warn"), "warn");
    }

    #[test]
    fn level_verbose_one() {
        assert_eq!(derive_level(&args_with(1, false), "info"), "debug");
    }

    #[test]
    fn level_verbose_two_plus() {
        assert_eq!(derive_level(&args_with(2, false), "info"), "trace");
        assert_eq!(derive_level(&args_with(10, false), "info"), "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true), "info"), "error");
    }
}
