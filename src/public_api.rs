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

use std::io::stdout;

use crossterm::{cursor::{Hide, Show},
                execute,
                terminal::{disable_raw_mode, enable_raw_mode}};
use thiserror::Error;

use crate::{cursor,
            enter_event_loop,
            get_terminal_width,
            is_fully_uninteractive_terminal,
            CrosstermKeyPressReader,
            CursorTransition,
            EventLoopResult,
            KeyPress,
            ListState,
            SelectComponent,
            SessionState,
            StyleSheet,
            TTYResult,
            DEVELOPMENT_MODE};

pub const DEFAULT_HEIGHT: usize = 5;

/// Configuration for one selection session. Validated at construction time:
/// `max_visible` must be at least 1 and is clamped to the list length, and
/// `start_index` must be a valid index into the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Max number of rows the window paints.
    pub max_visible: usize,
    /// Whether cursor movement and the window wrap around the ends of the list.
    pub wrap: bool,
    /// The `list_index` that is selected when the session first paints.
    pub start_index: usize,
    pub style: StyleSheet,
}

impl Default for SelectConfig {
    fn default() -> Self {
        SelectConfig {
            max_visible: DEFAULT_HEIGHT,
            wrap: false,
            start_index: 0,
            style: StyleSheet::default(),
        }
    }
}

/// Configuration-time errors are fatal and reported before any rendering occurs; no
/// partial session ever starts. Mid-session problems never surface here: color
/// fallback and input-source failure degrade to uncolored output and cancellation
/// respectively.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("cannot select from an empty list")]
    EmptyList,

    #[error("max visible rows must be at least 1 (requested {requested})")]
    InvalidMaxVisible { requested: usize },

    #[error("start index {start_index} is out of bounds for a list of {count} items")]
    StartIndexOutOfBounds { start_index: usize, count: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Show the selection TUI for a list of items and block until the user confirms or
/// cancels. Returns the 0-based index of the confirmed item, or `None` on cancel.
///
/// If the terminal is *fully* uninteractive, it returns `None`. This is useful so
/// that it won't block `cargo test` or when run in non-interactive CI/CD
/// environments.
///
/// # Errors
///
/// Returns a [SelectionError] when the list is empty, the configuration is invalid,
/// or terminal setup fails.
pub fn select_from_list(
    items: Vec<String>,
    config: SelectConfig,
) -> Result<Option<usize>, SelectionError> {
    select_from_keyed_list(items.into_iter().enumerate(), config)
}

/// Like [select_from_list], but preserves the caller's original keys (eg when the
/// list came from a map with non-contiguous keys). Returns the `original_key` of the
/// confirmed item, or `None` on cancel. `None` is the only cancel sentinel, so it can
/// never collide with a valid key.
///
/// # Errors
///
/// Returns a [SelectionError] when the list is empty, the configuration is invalid,
/// or terminal setup fails.
pub fn select_from_keyed_list<K: Clone>(
    pairs: impl IntoIterator<Item = (K, String)>,
    config: SelectConfig,
) -> Result<Option<K>, SelectionError> {
    let list = ListState::new(pairs)?;
    let mut state = build_session_state(&list, &config)?;

    // Under `cargo test` or headless CI there is no terminal to capture events from.
    // An input source that can never deliver events is a cancel outcome.
    if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
        return Ok(None);
    }

    let mut function_component = SelectComponent::new(stdout(), config.style);

    execute!(stdout(), Hide)?;
    enable_raw_mode()?;

    let result = enter_event_loop(
        &list,
        &mut state,
        &mut function_component,
        keypress_handler,
        &mut CrosstermKeyPressReader,
    );

    // Restore the terminal even when the loop failed. The final paint is left on
    // screen; the terminal cursor ends up on the line below it.
    execute!(stdout(), Show).ok();
    disable_raw_mode().ok();

    match result? {
        EventLoopResult::ExitWithResult(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Validate the config against the list and produce the initial session state.
fn build_session_state<K>(
    list: &ListState<K>,
    config: &SelectConfig,
) -> Result<SessionState, SelectionError> {
    if config.max_visible == 0 {
        return Err(SelectionError::InvalidMaxVisible {
            requested: config.max_visible,
        });
    }

    if config.start_index >= list.len() {
        return Err(SelectionError::StartIndexOutOfBounds {
            start_index: config.start_index,
            count: list.len(),
        });
    }

    Ok(SessionState {
        max_visible: config.max_visible.min(list.len()),
        wrap: config.wrap,
        cursor_index: config.start_index,
        last_line_count: 0,
        terminal_width: get_terminal_width(),
    })
}

/// Drive the cursor state machine from one logical input event. A rejected
/// transition maps to [EventLoopResult::Continue], so the event loop performs no
/// repaint at list boundaries when wrap is disabled.
fn keypress_handler<K: Clone>(
    list: &ListState<K>,
    state: &mut SessionState,
    key_press: KeyPress,
) -> EventLoopResult<K> {
    match key_press {
        KeyPress::Down => {
            DEVELOPMENT_MODE.then(|| {
                tracing::debug!(message = "Down", cursor_index = %state.cursor_index);
            });
            match cursor::advance(state, list.len()) {
                CursorTransition::Accepted => EventLoopResult::ContinueAndRerender,
                CursorTransition::Rejected => EventLoopResult::Continue,
            }
        }

        KeyPress::Up => {
            DEVELOPMENT_MODE.then(|| {
                tracing::debug!(message = "Up", cursor_index = %state.cursor_index);
            });
            match cursor::retreat(state, list.len()) {
                CursorTransition::Accepted => EventLoopResult::ContinueAndRerender,
                CursorTransition::Rejected => EventLoopResult::Continue,
            }
        }

        KeyPress::Confirm => {
            DEVELOPMENT_MODE.then(|| {
                tracing::debug!(message = "Confirm", cursor_index = %state.cursor_index);
            });
            match list.get(state.cursor_index) {
                Some(item) => {
                    EventLoopResult::ExitWithResult(item.original_key.clone())
                }
                None => EventLoopResult::ExitWithoutResult,
            }
        }

        KeyPress::Cancel => {
            DEVELOPMENT_MODE.then(|| {
                tracing::debug!(message = "Cancel");
            });
            EventLoopResult::ExitWithoutResult
        }

        KeyPress::Noop => EventLoopResult::Continue,
    }
}

#[cfg(test)]
mod test_select_from_list {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{TestStringWriter, TestVecKeyPressReader};

    fn width_80() -> usize { 80 }

    fn list_abc() -> ListState<usize> {
        ListState::new(
            ["a", "b", "c"]
                .iter()
                .enumerate()
                .map(|(index, value)| (index, value.to_string())),
        )
        .unwrap()
    }

    fn run_session(
        list: &ListState<usize>,
        config: &SelectConfig,
        script: Vec<KeyPress>,
    ) -> (EventLoopResult<usize>, String) {
        let mut state = build_session_state(list, config).unwrap();
        let mut function_component = SelectComponent {
            write: TestStringWriter::new(),
            style: config.style.clone(),
            get_width: width_80,
        };
        let mut reader = TestVecKeyPressReader {
            key_press_vec: script,
            index: None,
        };

        let result = enter_event_loop(
            list,
            &mut state,
            &mut function_component,
            keypress_handler,
            &mut reader,
        )
        .unwrap();

        (result, function_component.write.get_buffer().to_string())
    }

    #[test]
    fn confirm_returns_original_key_at_start_index() {
        let list = list_abc();
        let config = SelectConfig {
            start_index: 1,
            ..SelectConfig::default()
        };

        let (result, _) = run_session(&list, &config, vec![KeyPress::Confirm]);

        assert_eq!(result, EventLoopResult::ExitWithResult(1));
    }

    #[test]
    fn down_down_confirm_selects_third_item() {
        let list = list_abc();
        let config = SelectConfig::default();

        let (result, _) = run_session(
            &list,
            &config,
            vec![KeyPress::Down, KeyPress::Down, KeyPress::Confirm],
        );

        assert_eq!(result, EventLoopResult::ExitWithResult(2));
    }

    #[test]
    fn wrap_advance_from_last_item_selects_first() {
        let list = list_abc();
        let config = SelectConfig {
            wrap: true,
            start_index: 2,
            ..SelectConfig::default()
        };

        let (result, _) =
            run_session(&list, &config, vec![KeyPress::Down, KeyPress::Confirm]);

        assert_eq!(result, EventLoopResult::ExitWithResult(0));
    }

    #[test]
    fn cancel_returns_no_result_regardless_of_cursor() {
        let list = list_abc();
        let config = SelectConfig::default();

        let (result, _) =
            run_session(&list, &config, vec![KeyPress::Down, KeyPress::Cancel]);

        assert_eq!(result, EventLoopResult::ExitWithoutResult);
    }

    #[test]
    fn exhausted_input_source_is_a_cancel() {
        let list = list_abc();
        let config = SelectConfig::default();

        // The script runs dry, modeling the input stream closing with no confirm.
        let (result, _) = run_session(&list, &config, vec![KeyPress::Down]);

        assert_eq!(result, EventLoopResult::ExitWithoutResult);
    }

    #[test]
    fn repeated_cancel_terminates_on_the_first_one() {
        let list = list_abc();
        let config = SelectConfig::default();

        let (result, buffer) = run_session(
            &list,
            &config,
            vec![KeyPress::Cancel, KeyPress::Cancel, KeyPress::Cancel],
        );

        assert_eq!(result, EventLoopResult::ExitWithoutResult);
        // Only the initial paint happened: 3 items, one line each.
        assert_eq!(buffer.matches("\r\n").count(), 3);
    }

    #[test]
    fn rejected_transition_does_not_repaint() {
        let list = list_abc();
        let config = SelectConfig::default();

        // Up at index 0 with wrap disabled is rejected; no erase, no repaint.
        let (result, buffer) =
            run_session(&list, &config, vec![KeyPress::Up, KeyPress::Confirm]);

        assert_eq!(result, EventLoopResult::ExitWithResult(0));
        assert_eq!(buffer.matches("\r\n").count(), 3);
    }

    #[test]
    fn accepted_navigation_erases_and_repaints() {
        let list = list_abc();
        let config = SelectConfig::default();

        let (_, buffer) =
            run_session(&list, &config, vec![KeyPress::Down, KeyPress::Confirm]);

        // Two paints of 3 lines each, with an erase in between.
        assert_eq!(buffer.matches("\r\n").count(), 6);
        assert!(buffer.contains("\x1b[2K"));
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let list = list_abc();
        let config = SelectConfig::default();

        let (result, buffer) = run_session(
            &list,
            &config,
            vec![KeyPress::Noop, KeyPress::Noop, KeyPress::Confirm],
        );

        assert_eq!(result, EventLoopResult::ExitWithResult(0));
        assert_eq!(buffer.matches("\r\n").count(), 3);
    }

    #[test]
    fn keyed_list_confirm_returns_original_key() {
        let list = ListState::new(vec![
            (10_u32, "ten".to_string()),
            (20_u32, "twenty".to_string()),
            (30_u32, "thirty".to_string()),
        ])
        .unwrap();
        let config = SelectConfig::default();

        let mut state = build_session_state(&list, &config).unwrap();
        let mut function_component = SelectComponent {
            write: TestStringWriter::new(),
            style: config.style.clone(),
            get_width: width_80,
        };
        let mut reader = TestVecKeyPressReader {
            key_press_vec: vec![KeyPress::Down, KeyPress::Confirm],
            index: None,
        };

        let result = enter_event_loop(
            &list,
            &mut state,
            &mut function_component,
            keypress_handler,
            &mut reader,
        )
        .unwrap();

        assert_eq!(result, EventLoopResult::ExitWithResult(20));
    }

    #[test]
    fn empty_list_is_a_configuration_error() {
        let result = select_from_list(Vec::new(), SelectConfig::default());
        assert!(matches!(result, Err(SelectionError::EmptyList)));
    }

    #[test]
    fn zero_max_visible_is_a_configuration_error() {
        let list = list_abc();
        let config = SelectConfig {
            max_visible: 0,
            ..SelectConfig::default()
        };
        let result = build_session_state(&list, &config);
        assert!(matches!(
            result,
            Err(SelectionError::InvalidMaxVisible { requested: 0 })
        ));
    }

    #[test]
    fn out_of_bounds_start_index_is_a_configuration_error() {
        let list = list_abc();
        let config = SelectConfig {
            start_index: 3,
            ..SelectConfig::default()
        };
        let result = build_session_state(&list, &config);
        assert!(matches!(
            result,
            Err(SelectionError::StartIndexOutOfBounds {
                start_index: 3,
                count: 3
            })
        ));
    }

    #[test]
    fn max_visible_is_clamped_to_list_length() {
        let list = list_abc();
        let config = SelectConfig {
            max_visible: 10,
            ..SelectConfig::default()
        };
        let state = build_session_state(&list, &config).unwrap();
        assert_eq!(state.max_visible, 3);
    }
}
