/*
 *   Copyright (c) 2024 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # r3bl_select
//!
//! This crate can be used in two ways:
//! 1. As a library. This is useful if you want to add a lightweight scrollable selection
//!    list to your CLI app written in Rust. You can see an example of this in the `demos`
//!    folder in the `interactive_demo.rs` file. You can run it using `cargo run --example
//!    interactive_demo`.
//! 1. As a binary. This is useful if you want to use this crate as a command line tool.
//!    The binary target is called `sel`.
//!
//! ## How to use it as a library?
//!
//! The function that does the work of rendering the UI is called [`select_from_list`].
//! It takes a list of items and a [`SelectConfig`], paints a bounded scrolling window of
//! the items, and blocks until the user confirms a selection (Enter) or cancels (Esc or
//! Ctrl+C). It returns the index of the confirmed item, or `None` if the user cancelled.
//!
//! ```no_run
//! use r3bl_select::{select_from_list, SelectConfig};
//!
//! fn main() -> Result<(), r3bl_select::SelectionError> {
//!     let items = ["item 1", "item 2", "item 3", "item 4", "item 5", "item 6"]
//!         .iter()
//!         .map(|it| it.to_string())
//!         .collect();
//!
//!     let maybe_selected = select_from_list(items, SelectConfig::default())?;
//!
//!     match maybe_selected {
//!         Some(index) => println!("User selected item at index: {index}"),
//!         None => println!("User did not select anything"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! If your list has meaningful keys (eg, it came from a map), use
//! [`select_from_keyed_list`] which preserves the original keys and returns the key of
//! the confirmed item instead of a dense index.
//!
//! ## How to use it as a binary?
//!
//! You can install the binary using `cargo install r3bl_select` (from crates.io). Or
//! `cargo install --path .` from source. Once installed, `sel` is a command line tool
//! that allows you to select one of the options from the list that is passed into it
//! via `stdin`.
//!
//! ```shell
//! ls -1 | sel --wrap --tui-height 8
//! ```
//!
//! Here are the command line arguments that it accepts:
//! 1. `-t` or `--tui-height` - Optionally allows you to set the height of the TUI. The
//!    default is 5.
//! 1. `-w` or `--wrap` - Allows the cursor and the visible window to wrap around from
//!    the end of the list back to the start.
//! 1. `-k` or `--start-index` - The index of the item that is selected when the TUI
//!    first paints.
//! 1. `-g` or `--cursor-glyph` - The string used to mark the selected row.
//! 1. `--active-color` / `--inactive-color` - ANSI color names for the selected and
//!    unselected rows.
//! 1. `-c` or `--command-to-run-with-selection` - Allows you to specify the command to
//!    run with the selected item. For example `"echo foo \'%\'"` simply prints the
//!    selected item.
//! 1. `-f` or `--config-file` - A JSON file of defaults, using the same keys as the
//!    original `config.json` (`maxItems`, `loops`, `startKey`, `cursor`, `colors`).
//! 1. `--enable-logging` - Log to `log.txt`. You can use `tail -f log.txt` to watch.
//!
//! ## References
//!
//! ANSI escape codes:
//!
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>
//! - <https://www.asciitable.com/>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod color;
pub mod components;
pub mod cursor;
pub mod event_loop;
pub mod function_component;
pub mod keypress;
pub mod log;
pub mod public_api;
pub mod sizes;
pub mod state;
pub mod term;
pub mod test_utils;
pub mod window;

pub use color::*;
pub use components::*;
pub use cursor::*;
pub use event_loop::*;
pub use function_component::*;
pub use keypress::*;
pub use log::*;
pub use public_api::*;
pub use sizes::*;
pub use state::*;
pub use term::*;
pub use test_utils::*;
pub use window::*;

/// Enable debug logging in hot paths. The tracing macros are no-ops until a subscriber
/// is installed (see [log::try_initialize_logging_global]).
pub const DEVELOPMENT_MODE: bool = false;
