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

//! Cursor transitions for a selection session.
//!
//! A [Rejected](CursorTransition::Rejected) transition means the cursor hit a list
//! boundary with wrap disabled. The caller must not repaint in that case, which avoids
//! flicker at the ends of the list.

use crate::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorTransition {
    Accepted,
    Rejected,
}

/// Move the cursor one row down. At the last row: rejected without wrap, cycles to row
/// 0 with wrap.
pub fn advance(state: &mut SessionState, count: usize) -> CursorTransition {
    if state.cursor_index == count - 1 {
        if !state.wrap {
            return CursorTransition::Rejected;
        }
        state.cursor_index = 0;
    } else {
        state.cursor_index += 1;
    }
    CursorTransition::Accepted
}

/// Move the cursor one row up. At row 0: rejected without wrap, cycles to the last row
/// with wrap.
pub fn retreat(state: &mut SessionState, count: usize) -> CursorTransition {
    if state.cursor_index == 0 {
        if !state.wrap {
            return CursorTransition::Rejected;
        }
        state.cursor_index = count - 1;
    } else {
        state.cursor_index -= 1;
    }
    CursorTransition::Accepted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state_at(cursor_index: usize, wrap: bool) -> SessionState {
        SessionState {
            cursor_index,
            wrap,
            ..SessionState::default()
        }
    }

    #[test]
    fn advance_then_retreat_is_identity_at_interior_index() {
        for start in 1..9 {
            let mut state = state_at(start, false);
            assert_eq!(advance(&mut state, 10), CursorTransition::Accepted);
            assert_eq!(retreat(&mut state, 10), CursorTransition::Accepted);
            assert_eq!(state.cursor_index, start);
        }
    }

    #[test]
    fn boundaries_reject_without_wrap() {
        let mut state = state_at(9, false);
        assert_eq!(advance(&mut state, 10), CursorTransition::Rejected);
        assert_eq!(state.cursor_index, 9);

        let mut state = state_at(0, false);
        assert_eq!(retreat(&mut state, 10), CursorTransition::Rejected);
        assert_eq!(state.cursor_index, 0);
    }

    #[test]
    fn boundaries_cycle_with_wrap() {
        let mut state = state_at(9, true);
        assert_eq!(advance(&mut state, 10), CursorTransition::Accepted);
        assert_eq!(state.cursor_index, 0);

        let mut state = state_at(0, true);
        assert_eq!(retreat(&mut state, 10), CursorTransition::Accepted);
        assert_eq!(state.cursor_index, 9);
    }

    #[test]
    fn single_item_list_rejects_both_directions_without_wrap() {
        let mut state = state_at(0, false);
        assert_eq!(advance(&mut state, 1), CursorTransition::Rejected);
        assert_eq!(retreat(&mut state, 1), CursorTransition::Rejected);
        assert_eq!(state.cursor_index, 0);
    }
}
