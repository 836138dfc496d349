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

//! Run with `cargo run --example interactive_demo`. Use the arrow keys to move,
//! Enter to confirm, Esc or Ctrl+C to cancel.

use r3bl_select::{select_from_keyed_list,
                  select_from_list,
                  SelectConfig,
                  SelectionError,
                  StyleSheet};

fn main() -> Result<(), SelectionError> {
    single_select_13_items_vph_5()?;
    single_select_wrap_around()?;
    single_select_keyed_list()?;
    Ok(())
}

/// 13 items, viewport height 5, no wrap: the window snaps to the tail page once the
/// cursor enters the last 5 rows.
fn single_select_13_items_vph_5() -> Result<(), SelectionError> {
    let items: Vec<String> = (1..=13).map(|n| format!("item {n}")).collect();

    let maybe_selected = select_from_list(items, SelectConfig::default())?;

    match maybe_selected {
        Some(index) => println!("User selected index: {index}"),
        None => println!("User did not select anything"),
    }

    Ok(())
}

/// Wrap-around navigation: Down at the last item cycles to the first, and the window
/// wraps with it.
fn single_select_wrap_around() -> Result<(), SelectionError> {
    let items: Vec<String> = (1..=7).map(|n| format!("looping item {n}")).collect();

    let config = SelectConfig {
        wrap: true,
        start_index: 5,
        style: StyleSheet {
            cursor_glyph: "→".to_string(),
            active_color: "light_cyan".to_string(),
            inactive_color: "dark_gray".to_string(),
        },
        ..SelectConfig::default()
    };

    let maybe_selected = select_from_list(items, config)?;

    match maybe_selected {
        Some(index) => println!("User selected index: {index}"),
        None => println!("User did not select anything"),
    }

    Ok(())
}

/// A keyed list: the result is the original key, not a dense index.
fn single_select_keyed_list() -> Result<(), SelectionError> {
    let pairs = vec![
        ("us-east-1".to_string(), "US East (N. Virginia)".to_string()),
        ("eu-west-2".to_string(), "Europe (London)".to_string()),
        ("ap-south-1".to_string(), "Asia Pacific (Mumbai)".to_string()),
    ];

    let maybe_selected = select_from_keyed_list(pairs, SelectConfig::default())?;

    match maybe_selected {
        Some(key) => println!("User selected region: {key}"),
        None => println!("User did not select anything"),
    }

    Ok(())
}
