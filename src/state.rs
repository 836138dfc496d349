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

use crate::SelectionError;

/// One row of the list. `original_key` is whatever key the caller's collection used
/// (it may be non-contiguous, eg when the list came from a map). `list_index` is the
/// dense 0-based position assigned at construction time; all window and cursor
/// arithmetic uses `list_index`, never `original_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<K> {
    pub original_key: K,
    pub value: String,
    pub list_index: usize,
}

/// The full ordered sequence of [Item]s, fixed for the lifetime of a selection
/// session. Also precomputes the character width of the widest 0-based `list_index`
/// across the entire list, which the renderer uses to align index labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<K> {
    items: Vec<Item<K>>,
    longest_key_width: usize,
}

impl<K> ListState<K> {
    /// Build the dense item list from `(original_key, value)` pairs. An empty input
    /// has no item to select, so it is rejected here before any rendering occurs.
    pub fn new(
        pairs: impl IntoIterator<Item = (K, String)>,
    ) -> Result<ListState<K>, SelectionError> {
        let items: Vec<Item<K>> = pairs
            .into_iter()
            .enumerate()
            .map(|(list_index, (original_key, value))| Item {
                original_key,
                value,
                list_index,
            })
            .collect();

        if items.is_empty() {
            return Err(SelectionError::EmptyList);
        }

        let longest_key_width = items
            .iter()
            .map(|item| item.list_index.to_string().len())
            .max()
            .unwrap_or(1);

        Ok(ListState {
            items,
            longest_key_width,
        })
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn get(&self, list_index: usize) -> Option<&Item<K>> {
        self.items.get(list_index)
    }

    pub fn items(&self) -> &[Item<K>] { &self.items }

    /// Character width of the widest 0-based `list_index` in the whole list (not just
    /// the visible window).
    pub fn longest_key_width(&self) -> usize { self.longest_key_width }
}

/// The mutable state of one selection session, passed by reference to each step of the
/// event loop. Keeping this separate from [ListState] makes the cursor and window
/// logic testable without a live terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Max number of rows the window paints. Clamped to the list length at
    /// construction.
    pub max_visible: usize,
    /// Whether cursor movement and the window wrap around the ends of the list.
    pub wrap: bool,
    /// The `list_index` of the currently selected item. Invariant: always in
    /// `[0, list.len())`.
    pub cursor_index: usize,
    /// Number of terminal lines produced by the most recent paint. The next repaint
    /// erases exactly this many lines.
    pub last_line_count: usize,
    /// Column count of the terminal, re-queried on every repaint (the terminal can be
    /// resized between renders).
    pub terminal_width: usize,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            max_visible: 5,
            wrap: false,
            cursor_index: 0,
            last_line_count: 0,
            terminal_width: crate::DEFAULT_WIDTH,
        }
    }
}
