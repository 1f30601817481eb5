//! # Stockroom Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main.rs ────► stockroom_console::run()                                 │
//! │                    │                                                    │
//! │                    ├── Ok  ──► exit 0 (Exit chosen or input closed)     │
//! │                    └── Err ──► message on stderr, exit 1                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() {
    if let Err(e) = stockroom_console::run() {
        eprintln!("stockroom: {}", e);
        std::process::exit(1);
    }
}
