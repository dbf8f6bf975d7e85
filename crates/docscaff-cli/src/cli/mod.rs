//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums. No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "docscaff",
    bin_name = "docscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold the SysOp to Quantum MkDocs documentation project",
    long_about = "docscaff writes a fixed MkDocs project into the current directory: \
                  docs/, docs/infra/ and .github/workflows/, plus mkdocs.yml, \
                  requirements.txt, .gitignore, three Markdown pages and a \
                  GitHub Pages publish workflow. Existing files with the same \
                  names are overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 docscaff\n\
        \x20 docscaff -q\n\
        \x20 docscaff -v --no-color",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
}
