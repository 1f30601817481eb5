//! # State Module
//!
//! Session state for the console app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  run() creates ONE AppState and lends it to the menu loop:              │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │         Inventory            │   │         ConfigState          │   │
//! │  │  (stockroom-core)            │   │                              │   │
//! │  │  products + id counter       │   │  currency_symbol             │   │
//! │  │  mutated by commands         │   │  price_decimals              │   │
//! │  │                              │   │  confirm_removals            │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  Single-threaded: commands borrow `&mut AppState`, no locking.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

pub use config::{ConfigState, CONFIG_PATH_VAR, MAX_PRICE_DECIMALS};

use stockroom_core::Inventory;

/// Everything a session owns. Discarded at exit.
#[derive(Debug, Default)]
pub struct AppState {
    pub inventory: Inventory,
    pub config: ConfigState,
}

impl AppState {
    /// Starts a session with an empty catalog.
    pub fn new(config: ConfigState) -> Self {
        AppState {
            inventory: Inventory::new(),
            config,
        }
    }
}
