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

use std::{fmt::Write as _,
          io::{Result, Write}};

use crate::{colorize,
            compute_visible_window,
            get_terminal_width,
            FunctionComponent,
            InlineString,
            ListState,
            SessionState,
            StyleSheet};

/// Paints the visible window, one display line per item:
///
/// ```text
///  > 1) first item
///    2) second item
/// ```
///
/// Each line is ` {cursor} {padded_label}) {value} ` followed by `\r\n` (the session
/// runs in raw mode, so the output stream does not translate `\n` to CR+LF), wrapped
/// in the ANSI escape pair for the active or inactive color.
pub struct SelectComponent<W: Write> {
    pub write: W,
    pub style: StyleSheet,
    /// Queried on every render; the terminal can be resized between repaints. Tests
    /// substitute a fixed width.
    pub get_width: fn() -> usize,
}

impl<W: Write> SelectComponent<W> {
    pub fn new(write: W, style: StyleSheet) -> SelectComponent<W> {
        SelectComponent {
            write,
            style,
            get_width: get_terminal_width,
        }
    }
}

impl<W: Write, K> FunctionComponent<W, K> for SelectComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    fn render(&mut self, list: &ListState<K>, state: &mut SessionState) -> Result<()> {
        state.terminal_width = (self.get_width)();
        let terminal_width = state.terminal_width.max(1);

        let window = compute_visible_window(
            list.len(),
            state.cursor_index,
            state.max_visible,
            state.wrap,
        );

        // The inactive rows get an equal-width blank in place of the cursor glyph.
        // Char count (not byte count) keeps multi-byte glyphs like `→` aligned.
        let glyph = self.style.cursor_glyph.as_str();
        let blank = " ".repeat(glyph.chars().count());

        let mut line_count = 0;

        for &list_index in window.iter() {
            let Some(item) = list.get(list_index) else {
                continue;
            };

            let is_active = list_index == state.cursor_index;

            // 1-based label for display, right-aligned to the widest label in the
            // entire list. The saturating subtraction covers list sizes where the
            // 1-based label outgrows the 0-based key width (eg label "10)" in a
            // 10-item list).
            let mut display_key = InlineString::new();
            let _ = write!(display_key, "{})", item.list_index + 1);
            let key_padding = " "
                .repeat((list.longest_key_width() + 1).saturating_sub(display_key.len()));

            let cursor = if is_active { glyph } else { blank.as_str() };

            let line =
                format!(" {cursor} {key_padding}{display_key} {} \r\n", item.value);

            let color_name = if is_active {
                &self.style.active_color
            } else {
                &self.style.inactive_color
            };

            self.write.write_all(colorize(&line, color_name).as_bytes())?;

            // How many terminal lines this item occupies once the terminal wraps it.
            line_count += item.value.len().div_ceil(terminal_width).max(1);
        }

        state.last_line_count = line_count;
        self.write.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{contains_ansi_escape_sequence, TestStringWriter};

    fn width_80() -> usize { 80 }
    fn width_10() -> usize { 10 }

    fn string_list(values: &[&str]) -> ListState<usize> {
        ListState::new(
            values
                .iter()
                .enumerate()
                .map(|(index, value)| (index, value.to_string())),
        )
        .unwrap()
    }

    fn component_with(
        style: StyleSheet,
        get_width: fn() -> usize,
    ) -> SelectComponent<TestStringWriter> {
        SelectComponent {
            write: TestStringWriter::new(),
            style,
            get_width,
        }
    }

    #[test]
    fn render_produces_exact_escape_bytes() {
        let list = string_list(&["a", "b", "c"]);
        let mut state = SessionState {
            max_visible: 3,
            ..SessionState::default()
        };
        let mut component = component_with(StyleSheet::default(), width_80);

        component.render(&list, &mut state).unwrap();

        let expected = "\x1b[97m > 1) a \r\n\x1b[39m\
                        \x1b[90m   2) b \r\n\x1b[39m\
                        \x1b[90m   3) c \r\n\x1b[39m";
        assert_eq!(component.write.get_buffer(), expected);
        assert_eq!(state.last_line_count, 3);
        assert_eq!(state.terminal_width, 80);
    }

    #[test]
    fn labels_align_to_widest_label_in_whole_list() {
        let values: Vec<String> = (1..=12).map(|n| format!("row {n}")).collect();
        let value_refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let list = string_list(&value_refs);

        // Window starts at the cursor (row 11), wraps to row 1.
        let mut state = SessionState {
            max_visible: 2,
            wrap: true,
            cursor_index: 11,
            ..SessionState::default()
        };
        let mut component = component_with(StyleSheet::default(), width_80);

        component.render(&list, &mut state).unwrap();

        let buffer = component.write.get_buffer();
        // "12)" needs no padding; "1)" is left-padded by one space to line up.
        assert!(buffer.contains(" > 12) row 12 \r\n"));
        assert!(buffer.contains("    1) row 1 \r\n"));
    }

    #[test]
    fn line_count_accounts_for_terminal_wrapping() {
        let long_value = "x".repeat(25);
        let list = string_list(&[long_value.as_str(), "short"]);
        let mut state = SessionState {
            max_visible: 2,
            ..SessionState::default()
        };
        let mut component = component_with(StyleSheet::default(), width_10);

        component.render(&list, &mut state).unwrap();

        // 25 chars at width 10 -> 3 lines; "short" -> 1 line.
        assert_eq!(state.last_line_count, 4);
    }

    #[test]
    fn empty_value_still_counts_one_line() {
        let list = string_list(&[""]);
        let mut state = SessionState {
            max_visible: 1,
            ..SessionState::default()
        };
        let mut component = component_with(StyleSheet::default(), width_80);

        component.render(&list, &mut state).unwrap();

        assert_eq!(state.last_line_count, 1);
    }

    #[test]
    fn unknown_color_names_render_uncolored() {
        let list = string_list(&["a"]);
        let mut state = SessionState {
            max_visible: 1,
            ..SessionState::default()
        };
        let style = StyleSheet {
            active_color: "hot_pink".to_string(),
            inactive_color: "hot_pink".to_string(),
            ..StyleSheet::default()
        };
        let mut component = component_with(style, width_80);

        component.render(&list, &mut state).unwrap();

        let buffer = component.write.get_buffer();
        assert!(!contains_ansi_escape_sequence(buffer));
        assert_eq!(buffer, " > 1) a \r\n");
    }

    #[test]
    fn multi_char_glyph_gets_equal_width_blank() {
        let list = string_list(&["a", "b"]);
        let mut state = SessionState {
            max_visible: 2,
            ..SessionState::default()
        };
        let style = StyleSheet {
            cursor_glyph: "→".to_string(),
            ..StyleSheet::default()
        };
        let mut component = component_with(style, width_80);

        component.render(&list, &mut state).unwrap();

        let buffer = component.write.get_buffer();
        // The glyph is one char wide (3 bytes), so the blank is a single space.
        assert!(buffer.contains(" → 1) a \r\n"));
        assert!(buffer.contains("   2) b \r\n"));
    }

    #[test]
    fn erase_clears_exactly_last_line_count_lines() {
        let list = string_list(&["a", "b"]);
        let mut state = SessionState {
            max_visible: 2,
            ..SessionState::default()
        };
        let mut component = component_with(StyleSheet::default(), width_80);

        component.render(&list, &mut state).unwrap();
        assert_eq!(state.last_line_count, 2);

        component.write = TestStringWriter::new();
        FunctionComponent::<_, usize>::erase(&mut component, &mut state).unwrap();

        let expected = "\x1b[1G\
                        \x1b[2K\x1b[1F\x1b[2K\
                        \x1b[2K\x1b[1F\x1b[2K";
        assert_eq!(component.write.get_buffer(), expected);
    }
}
