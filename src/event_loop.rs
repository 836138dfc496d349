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

use std::io::{Result, Write};

use crate::{FunctionComponent, KeyPress, KeyPressReader, ListState, SessionState,
            DEVELOPMENT_MODE};

/// What the keypress handler tells the event loop to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<K> {
    /// Keep looping without repainting (rejected transition or ignored key).
    Continue,
    /// Erase the previous paint and repaint (accepted navigation).
    ContinueAndRerender,
    /// The user confirmed the item with this original key.
    ExitWithResult(K),
    /// The user cancelled, or the input source closed.
    ExitWithoutResult,
}

/// Run one selection session to completion: paint once, then process one logical
/// input event at a time until the handler returns a terminal result.
///
/// This is the only place that blocks. Strictly sequential: each event is fully
/// processed (state mutation plus repaint) before the next is read. A closed or
/// failed input source is mapped to [KeyPress::Cancel], since the user-visible
/// contract only distinguishes "selected" vs "not selected".
pub fn enter_event_loop<K, W: Write>(
    list: &ListState<K>,
    state: &mut SessionState,
    function_component: &mut impl FunctionComponent<W, K>,
    on_keypress: impl Fn(&ListState<K>, &mut SessionState, KeyPress) -> EventLoopResult<K>,
    reader: &mut impl KeyPressReader,
) -> Result<EventLoopResult<K>> {
    // Initial paint.
    function_component.render(list, state)?;

    loop {
        let key_press = reader.read_key_press().unwrap_or(KeyPress::Cancel);

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(
                message = "enter_event_loop() got keypress",
                key_press = ?key_press,
                cursor_index = %state.cursor_index
            );
        });

        match on_keypress(list, state, key_press) {
            EventLoopResult::ContinueAndRerender => {
                function_component.erase(state)?;
                function_component.render(list, state)?;
            }
            EventLoopResult::Continue => {
                // Noop. Simply continue the loop.
            }
            EventLoopResult::ExitWithResult(it) => {
                return Ok(EventLoopResult::ExitWithResult(it));
            }
            EventLoopResult::ExitWithoutResult => {
                return Ok(EventLoopResult::ExitWithoutResult);
            }
        }
    }
}
