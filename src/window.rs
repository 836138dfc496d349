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

//! ### Visible window computation
//!
//! The window is the subsequence of the list that gets painted. It logically starts
//! at the cursor and holds up to `max_visible` rows:
//!
//! ```text
//!   wrap = false, cursor not in last page     wrap = false, cursor in last page
//!   +-------------------+                     +-------------------+
//!   | cursor ->  item 3 |                     |            item 7 |
//!   |            item 4 |                     | cursor ->  item 8 |
//!   |            item 5 |                     |            item 9 |
//!   +-------------------+                     +-------------------+
//!                                              (window snaps to the tail; the cursor
//!                                               walks the fixed last page)
//!
//!   wrap = true, slice runs off the end
//!   +-------------------+
//!   | cursor ->  item 8 |
//!   |            item 9 |
//!   |            item 0 |   <- padded from the start of the list
//!   +-------------------+
//! ```

use crate::InlineVec;

/// Compute the `list_index` values of the visible rows, in paint order.
///
/// - Without wrap, once the cursor enters the last `max_visible` rows the window snaps
///   to the fixed tail page, so a short trailing window is never produced.
/// - With wrap, a slice that runs off the end of the list is padded with rows from the
///   start (wrap-around concatenation).
/// - `max_visible == count` with wrap produces the entire list, in order, starting at
///   the cursor.
pub fn compute_visible_window(
    count: usize,
    cursor_index: usize,
    max_visible: usize,
    wrap: bool,
) -> InlineVec<usize> {
    let mut window: InlineVec<usize> = InlineVec::new();

    if !wrap && cursor_index >= count.saturating_sub(max_visible) {
        // Tail window, clamped to the start of the list.
        window.extend(count.saturating_sub(max_visible)..count);
    } else {
        window.extend(cursor_index..(cursor_index + max_visible).min(count));
    }

    // The straight slice ran off the end: pad from the start of the list.
    if window.len() < max_visible && max_visible <= count && wrap {
        let shortfall = max_visible - window.len();
        window.extend(0..shortfall);
    }

    window
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn window(
        count: usize,
        cursor_index: usize,
        max_visible: usize,
        wrap: bool,
    ) -> Vec<usize> {
        compute_visible_window(count, cursor_index, max_visible, wrap).to_vec()
    }

    #[test]
    fn window_length_is_min_of_max_visible_and_count() {
        for count in 1..8 {
            for max_visible in 1..8 {
                for cursor_index in 0..count {
                    let len = window(count, cursor_index, max_visible, false).len();
                    assert_eq!(len, max_visible.min(count));
                }
            }
        }
    }

    #[test]
    fn plain_slice_when_cursor_not_in_last_page() {
        assert_eq!(window(10, 0, 3, false), vec![0, 1, 2]);
        assert_eq!(window(10, 4, 3, false), vec![4, 5, 6]);
        assert_eq!(window(10, 6, 3, false), vec![6, 7, 8]);
    }

    #[test]
    fn window_snaps_to_tail_without_wrap() {
        // Once the cursor enters the last page, the window is the fixed tail page.
        for cursor_index in [7, 8, 9] {
            assert_eq!(window(10, cursor_index, 3, false), vec![7, 8, 9]);
        }
    }

    #[test]
    fn window_wraps_around_the_end() {
        assert_eq!(window(5, 3, 4, true), vec![3, 4, 0, 1]);
        assert_eq!(window(5, 4, 4, true), vec![4, 0, 1, 2]);
    }

    #[test]
    fn full_list_window_starts_at_cursor() {
        assert_eq!(window(4, 2, 4, true), vec![2, 3, 0, 1]);
        assert_eq!(window(4, 0, 4, true), vec![0, 1, 2, 3]);
    }

    #[test]
    fn no_wrap_padding_when_wrap_disabled() {
        // With wrap on but cursor in the interior, the slice never runs off the end.
        assert_eq!(window(10, 2, 3, true), vec![2, 3, 4]);
    }

    #[test]
    fn short_list_yields_short_window() {
        // max_visible is clamped at construction, but the function itself degrades to
        // the whole list when asked for more rows than exist.
        assert_eq!(window(2, 0, 5, false), vec![0, 1]);
        assert_eq!(window(2, 1, 5, true), vec![1]);
    }
}
