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

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Logical input events for a selection session, abstracted away from physical key
/// codes. Keys outside the mapped set produce [KeyPress::Noop], which the event loop
/// ignores.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyPress {
    Up,
    Down,
    Confirm,
    Cancel,
    #[default]
    Noop,
}

/// The source of logical input events. The session controller has no dependency on
/// how events are physically captured; tests script events with
/// [TestVecKeyPressReader](crate::TestVecKeyPressReader).
///
/// Returning [None] means the input source has closed or failed, which the event loop
/// treats as a cancel outcome.
pub trait KeyPressReader {
    fn read_key_press(&mut self) -> Option<KeyPress>;
}

pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    /// Blocks until the next keypress. Maps: Enter -> confirm, Esc / Ctrl+C -> cancel,
    /// arrow keys -> up / down, everything else -> noop.
    fn read_key_press(&mut self) -> Option<KeyPress> {
        let event = read().ok()?;

        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event
        else {
            return Some(KeyPress::Noop);
        };

        // KeyEventKind::Release is reported on Windows; only react to presses.
        if kind != KeyEventKind::Press {
            return Some(KeyPress::Noop);
        }

        let key_press = match code {
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::Enter => KeyPress::Confirm,
            KeyCode::Esc => KeyPress::Cancel,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                KeyPress::Cancel
            }
            _ => KeyPress::Noop,
        };

        Some(key_press)
    }
}
