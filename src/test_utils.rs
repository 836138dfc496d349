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

//! Fixtures for exercising the event loop and the renderer without a live terminal.

use std::io::{Result, Write};

use crate::{KeyPress, KeyPressReader};

/// An [io::Write](std::io::Write) that captures UTF-8 output into a [String], so tests
/// can assert on the exact escape bytes a render produced.
pub struct TestStringWriter {
    buffer: String,
}

impl Default for TestStringWriter {
    fn default() -> Self { Self::new() }
}

impl TestStringWriter {
    pub fn new() -> Self {
        TestStringWriter {
            buffer: String::new(),
        }
    }

    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let result = std::str::from_utf8(buf);
        match result {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// A scripted [KeyPressReader]. Yields the events in order, then [None] once the
/// script is exhausted, which models the input stream closing with no confirm (a
/// cancel outcome).
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<KeyPress>,
    pub index: Option<usize>,
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> Option<KeyPress> {
        let next_index = match self.index {
            Some(index) => index + 1,
            None => 0,
        };
        self.index = Some(next_index);
        self.key_press_vec.get(next_index).copied()
    }
}

pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|it| it == '\x1b')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_is_ansi_escape_sequence() {
        assert_eq!(
            contains_ansi_escape_sequence(
                "\x1b[31mThis is red text.\x1b[0m And this is normal text."
            ),
            true
        );

        assert_eq!(contains_ansi_escape_sequence("This is normal text."), false);
    }

    #[test]
    fn scripted_reader_yields_none_when_exhausted() {
        let mut reader = TestVecKeyPressReader {
            key_press_vec: vec![KeyPress::Down, KeyPress::Up],
            index: None,
        };

        assert_eq!(reader.read_key_press(), Some(KeyPress::Down));
        assert_eq!(reader.read_key_press(), Some(KeyPress::Up));
        assert_eq!(reader.read_key_press(), None);
        assert_eq!(reader.read_key_press(), None);
    }
}
