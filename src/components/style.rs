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

/// Presentation half of the session configuration: the cursor glyph and the color
/// names for the active and inactive rows.
///
/// Colors are stored as names (eg `"dark_gray"`) rather than resolved
/// [ColorName](crate::ColorName) values, because an unrecognized name must degrade to
/// uncolored output at render time instead of failing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub cursor_glyph: String,
    pub active_color: String,
    pub inactive_color: String,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            cursor_glyph: ">".to_string(),
            active_color: "white".to_string(),
            inactive_color: "dark_gray".to_string(),
        }
    }
}
