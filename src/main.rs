// Entrypoint for the interactive gradebook.
// - Keeps `main` small: initialize logging, open the record store, and
//   hand it to the session loop.
// - Returns `anyhow::Result` so a top-level failure reports on stderr
//   with exit status 1.

use anyhow::Context;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use gradebook_cli::config::{self, Config};
use gradebook_cli::session;
use gradebook_cli::store::Store;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never land in the middle of a menu.
    let log_cfg = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("gradebook_cli")
        .build();
    TermLogger::init(
        config::log_level_from_env(),
        log_cfg,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logging")?;
    log::info!("logging started");

    // The data directory comes from `GRADEBOOK_DATA_DIR`, defaulting to
    // the current directory. See `config::Config::from_env`.
    let cfg = Config::from_env();
    let mut store = Store::open(&cfg).with_context(|| {
        format!("failed to open record store in {}", cfg.data_dir.display())
    })?;

    // Run the interactive session. This call blocks until the operator
    // exits, which also persists the marks table one last time.
    session::main_menu(&mut store)
}
