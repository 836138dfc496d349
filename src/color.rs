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

//! ANSI foreground color support for display lines.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// SGR code that resets the foreground color only (not a full attribute reset).
pub const FG_RESET_CODE: u8 = 39;

/// The 16 standard ANSI foreground colors, addressed by their lowercase snake_case
/// names in user-facing configuration (eg: `"light_green"`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

impl ColorName {
    /// SGR foreground color code: 30-37 for the normal colors, 90-97 for the bright
    /// ("light") colors.
    #[rustfmt::skip]
    pub fn fg_code(&self) -> u8 {
        match self {
            ColorName::Black        => 30,
            ColorName::Red          => 31,
            ColorName::Green        => 32,
            ColorName::Yellow       => 33,
            ColorName::Blue         => 34,
            ColorName::Magenta      => 35,
            ColorName::Cyan         => 36,
            ColorName::LightGray    => 37,
            ColorName::DarkGray     => 90,
            ColorName::LightRed     => 91,
            ColorName::LightGreen   => 92,
            ColorName::LightYellow  => 93,
            ColorName::LightBlue    => 94,
            ColorName::LightMagenta => 95,
            ColorName::LightCyan    => 96,
            ColorName::White        => 97,
        }
    }

    /// Resolve a lowercase snake_case color name. Returns [None] for unrecognized
    /// names.
    #[rustfmt::skip]
    pub fn from_name(name: &str) -> Option<ColorName> {
        match name {
            "black"         => Some(ColorName::Black),
            "red"           => Some(ColorName::Red),
            "green"         => Some(ColorName::Green),
            "yellow"        => Some(ColorName::Yellow),
            "blue"          => Some(ColorName::Blue),
            "magenta"       => Some(ColorName::Magenta),
            "cyan"          => Some(ColorName::Cyan),
            "light_gray"    => Some(ColorName::LightGray),
            "dark_gray"     => Some(ColorName::DarkGray),
            "light_red"     => Some(ColorName::LightRed),
            "light_green"   => Some(ColorName::LightGreen),
            "light_yellow"  => Some(ColorName::LightYellow),
            "light_blue"    => Some(ColorName::LightBlue),
            "light_magenta" => Some(ColorName::LightMagenta),
            "light_cyan"    => Some(ColorName::LightCyan),
            "white"         => Some(ColorName::White),
            _               => None,
        }
    }
}

impl Display for ColorName {
    /// SGR: set graphics mode command for the foreground color.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{CSI}{}{SGR}", self.fg_code())
    }
}

/// Wrap `text` in the foreground color escape pair for the given color name. The
/// trailing escape resets the foreground color only. Unrecognized color names return
/// the input unchanged, so a bad name in user configuration degrades to uncolored
/// output instead of aborting a render.
pub fn colorize(text: &str, color_name: &str) -> String {
    match ColorName::from_name(color_name) {
        Some(color) => format!("{color}{text}{CSI}{FG_RESET_CODE}{SGR}"),
        None => text.to_string(),
    }
}
