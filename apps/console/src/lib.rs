//! # Stockroom Console Library
//!
//! The interactive front end for the stockroom catalog. The `stockroom`
//! binary is a thin wrapper around [`run`].
//!
//! ## Module Organization
//! ```text
//! stockroom_console/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── menu.rs         ◄─── Main menu loop and MenuChoice
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (inventory + config)
//! │   └── config.rs   ◄─── ConfigState (TOML + env overrides)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Add, update, remove, search
//! │   └── catalog.rs  ◄─── Display all, sort, low stock
//! ├── input.rs        ◄─── Console prompts and validators
//! ├── render.rs       ◄─── Blocks and tables
//! └── error.rs        ◄─── AppError for everything above
//! ```
//!
//! ## Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   stdin ──► Console ──► menu / commands ──► Console ──► stdout          │
//! │                              │                                          │
//! │                         tracing events ─────────────────► stderr        │
//! │                                                                         │
//! │  Logs never share stdout with the menu. By default only warnings        │
//! │  reach stderr, so a normal session shows nothing but the menu.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod input;
pub mod menu;
pub mod render;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::AppResult;
use input::Console;
use state::{AppState, ConfigState};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Runs one interactive session on the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ────► EnvFilter from RUST_LOG, writer = stderr   │
/// │  2. Load Configuration ────► defaults < stockroom.toml < STOCKROOM_*    │
/// │  3. Build State ───────────► empty Inventory, ids start at 1            │
/// │  4. Run Menu ──────────────► until Exit or end of input                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting stockroom");

    let config = ConfigState::load_or_default(None);
    let mut state = AppState::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    menu::run_session(&mut state, &mut console)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=stockroom=info` - Session events (items added, removed, ...)
/// - `RUST_LOG=stockroom_core=debug` - Catalog mutations only
/// - Default: `warn` for everything
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    // try_init: a second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_FILTER)
}
