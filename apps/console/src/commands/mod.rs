//! # Commands Module
//!
//! One function per main-menu action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Add, update, remove, search (single product)
//! └── catalog.rs  ◄─── Display all, sort, low stock (whole catalog)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  menu loop ── MenuChoice::UpdateItem ──► product::update(state, con)    │
//! │                                               │                         │
//! │                   console.prompt_int("Enter product ID ...")            │
//! │                                               │                         │
//! │                   state.inventory.find(id)  ──┤                         │
//! │                     None  ► "Item not found!" │                         │
//! │                     Some  ► edit in place ────┘                         │
//! │                                                                         │
//! │  Every command: prompts via Console, reads/mutates AppState,            │
//! │  prints with render::*, returns AppResult<()>.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod product;

/// Separator printed before most command prompts.
pub(crate) const SECTION_RULE: &str = "\n------------------------------------------";

/// Shown when a typed id matches no product.
pub(crate) const NOT_FOUND: &str = "Item not found!";
