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

use crossterm::{cursor::{MoveToColumn, MoveToPreviousLine},
                queue,
                terminal::{Clear, ClearType}};

use crate::{ListState, SessionState};

/// The seam between the event loop and the thing that paints. A component owns a
/// writer, paints the visible window into it, and knows how to erase its own previous
/// paint.
pub trait FunctionComponent<W: Write, K> {
    fn get_write(&mut self) -> &mut W;

    /// Paint the visible window and record the produced terminal line count into
    /// [SessionState::last_line_count] for the next erase.
    fn render(&mut self, list: &ListState<K>, state: &mut SessionState) -> Result<()>;

    /// Erase exactly the number of terminal lines recorded by the previous render,
    /// leaving the caret at the start of the line where the next paint begins.
    ///
    /// If the terminal shrank since the last paint, lines may wrap differently than
    /// when the count was recorded and the erase can clear the wrong number of lines.
    /// This is a known accuracy limit of the line-count bookkeeping.
    fn erase(&mut self, state: &mut SessionState) -> Result<()> {
        let line_count = state.last_line_count;
        let writer = self.get_write();

        queue! {
            writer,
            MoveToColumn(0),
        }?;

        for _ in 0..line_count {
            queue! {
                writer,
                Clear(ClearType::CurrentLine),
                MoveToPreviousLine(1),
                Clear(ClearType::CurrentLine),
            }?;
        }

        writer.flush()?;

        Ok(())
    }
}
