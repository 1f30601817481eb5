//! # Main Menu
//!
//! The session loop: show the menu, read a choice, run the command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session Loop                                    │
//! │                                                                         │
//! │   ┌──► print MAIN_MENU                                                  │
//! │   │        │                                                            │
//! │   │        ▼                                                            │
//! │   │   prompt_int(1..=8) ──► MenuChoice                                  │
//! │   │        │                                                            │
//! │   │        ▼                                                            │
//! │   │   commands::* ── Ok ──────────────────────────┐                     │
//! │   │        │ Err(recoverable) ► "Error: ..." ─────┤                     │
//! │   └────────┴──────────────────────────────────────┘                     │
//! │                                                                         │
//! │   Exit                ──► "Exiting program", return Ok                  │
//! │   InputClosed (EOF)   ──► return Ok                                     │
//! │   Io failure          ──► return Err                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::commands::{catalog, product};
use crate::error::{AppError, AppResult};
use crate::input::Console;
use crate::state::AppState;

pub const MAIN_MENU: &str = "\n-----<Main Menu>-----\n\
1. Add Item\n\
2. Update Item\n\
3. Remove Item\n\
4. Display All Items\n\
5. Search Item\n\
6. Sort Items\n\
7. Display Low Stock Items\n\
8. Exit\n\
\n---------------------";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    UpdateItem,
    RemoveItem,
    DisplayAll,
    SearchItem,
    SortItems,
    LowStock,
    Exit,
}

impl TryFrom<u32> for MenuChoice {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::AddItem),
            2 => Ok(MenuChoice::UpdateItem),
            3 => Ok(MenuChoice::RemoveItem),
            4 => Ok(MenuChoice::DisplayAll),
            5 => Ok(MenuChoice::SearchItem),
            6 => Ok(MenuChoice::SortItems),
            7 => Ok(MenuChoice::LowStock),
            8 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Runs one command. Exit is handled by the caller.
fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    match choice {
        MenuChoice::AddItem => product::add(state, console),
        MenuChoice::UpdateItem => product::update(state, console),
        MenuChoice::RemoveItem => product::remove(state, console),
        MenuChoice::DisplayAll => catalog::display_all(state, console),
        MenuChoice::SearchItem => product::search(state, console),
        MenuChoice::SortItems => catalog::sort(state, console),
        MenuChoice::LowStock => catalog::low_stock(state, console),
        MenuChoice::Exit => Ok(()),
    }
}

/// Shows the menu once and runs the picked command.
///
/// Returns `Ok(false)` when the user chose Exit.
fn step<R: BufRead, W: Write>(state: &mut AppState, console: &mut Console<R, W>) -> AppResult<bool> {
    console.println(MAIN_MENU)?;

    let picked = console.prompt_int("Enter your choice: ", 1, 8)?;
    let Ok(choice) = MenuChoice::try_from(picked) else {
        return Ok(true);
    };
    debug!(?choice, "Menu choice");

    if choice == MenuChoice::Exit {
        return Ok(false);
    }
    dispatch(choice, state, console)?;
    Ok(true)
}

/// Runs the menu until the user exits or input ends.
///
/// Recoverable errors are printed and the menu is shown again. Terminal
/// failures end the session with `Err`.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    loop {
        match step(state, console) {
            Ok(true) => {}
            Ok(false) => {
                console.println("Exiting program")?;
                info!(products = state.inventory.len(), "Session ended by user");
                return Ok(());
            }
            Err(AppError::InputClosed) => {
                info!(products = state.inventory.len(), "Input closed, ending session");
                return Ok(());
            }
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "Command failed");
                console.println(&format!("Error: {}", e))?;
            }
            Err(e) => return Err(e),
        }
    }
}
