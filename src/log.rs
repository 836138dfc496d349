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

//! File logging support. Logging is disabled by default: all the `tracing` macros in
//! this crate are no-ops until a subscriber is installed by calling
//! [try_initialize_logging_global]. You can use `tail -f log.txt` to watch the logs.

use miette::miette;
use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Install a global `tracing` subscriber that writes to
/// [DEFAULT_LOG_FILE_NAME] in the current directory, with ANSI escape sequences
/// disabled (the output is a file, not a terminal).
///
/// Passing [LevelFilter::OFF] is an early-return no-op: nothing is installed and no
/// file is touched.
///
/// # Errors
///
/// Fails if a global subscriber has already been installed (eg by the host
/// application, or by calling this function twice).
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    if level_filter == LevelFilter::OFF {
        return Ok(());
    }

    let file_appender = tracing_appender::rolling::never(".", DEFAULT_LOG_FILE_NAME);

    tracing_subscriber::fmt()
        .with_max_level(level_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|err| miette!("failed to install global tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    /// One test covers the whole lifecycle, since the tracing dispatcher is
    /// process-global.
    #[test]
    #[serial]
    fn off_is_a_noop_and_double_init_fails() {
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
        // OFF never installs a subscriber, so it can be repeated.
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());

        assert!(try_initialize_logging_global(LevelFilter::DEBUG).is_ok());
        // The global dispatcher can only be set once per process.
        assert!(try_initialize_logging_global(LevelFilter::DEBUG).is_err());
    }
}
