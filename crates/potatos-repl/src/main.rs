//! PotatOS REPL entry point.
//!
//! Launch the interactive shell:
//! ```bash
//! cargo run -p potatos-repl
//! ```

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use potatos_repl::{ReplConfig, paths};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = ReplConfig::load(&paths::config_file())?;
    potatos_repl::run(config)
}
