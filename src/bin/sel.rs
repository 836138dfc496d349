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

//! `sel` - pipe a list of lines in via `stdin`, pick one interactively, and either
//! print it or run a command with it.
//!
//! ```shell
//! ls -1 | sel --wrap --tui-height 8
//! cat TODO.todo | sel -c "echo %"
//! ```

use std::{io::{stdin, BufRead},
          path::PathBuf,
          process::Command};

use clap::{CommandFactory, Parser};
use miette::IntoDiagnostic;
use r3bl_select::{select_from_list,
                  try_initialize_logging_global,
                  SelectConfig,
                  StdinIsPipedResult,
                  StdoutIsPipedResult,
                  StyleSheet};
use serde::Deserialize;
use tracing_core::LevelFilter;

const SELECTED_ITEM_SYMBOL: char = '%';

#[derive(Debug, Parser)]
#[command(bin_name = "sel")]
#[command(about = "Select one line from stdin with a scrollable TUI list, then print it or run a command with it", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
struct CliArgs {
    /// Optional maximum height of the list TUI (in rows)
    #[arg(value_name = "height", long, short = 't')]
    tui_height: Option<usize>,

    /// Wrap the cursor and the visible window around the ends of the list
    #[arg(long, short = 'w')]
    wrap: bool,

    /// Index of the item that is selected when the TUI first paints
    #[arg(value_name = "index", long, short = 'k')]
    start_index: Option<usize>,

    /// String used to mark the selected row, eg ">" or "→"
    #[arg(value_name = "glyph", long, short = 'g')]
    cursor_glyph: Option<String>,

    /// ANSI color name for the selected row, eg "white" or "light_green"
    #[arg(value_name = "color", long)]
    active_color: Option<String>,

    /// ANSI color name for the unselected rows, eg "dark_gray"
    #[arg(value_name = "color", long)]
    inactive_color: Option<String>,

    /// The selected item is passed to this command as `%` and executed in your shell.
    /// For eg: "echo %". Please wrap the command in quotes 💡
    #[arg(value_name = "command", long, short = 'c')]
    command_to_run_with_selection: Option<String>,

    /// JSON file of defaults (keys: maxItems, loops, startKey, cursor, colors).
    /// Explicit flags override the file; the file overrides built-in defaults
    #[arg(value_name = "path", long, short = 'f')]
    config_file: Option<PathBuf>,

    /// Log to `log.txt` in the current directory
    #[arg(long)]
    enable_logging: bool,
}

/// Defaults file, mirroring the original `config.json` key names.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ConfigFile {
    max_items: Option<usize>,
    loops: Option<bool>,
    start_key: Option<usize>,
    cursor: Option<String>,
    colors: Option<ConfigFileColors>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFileColors {
    active: Option<String>,
    inactive: Option<String>,
}

fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    cli_args.enable_logging.then(|| {
        try_initialize_logging_global(LevelFilter::DEBUG).ok();
        tracing::debug!(message = "Start logging...", cli_args = ?cli_args);
    });

    let bin_name = CliArgs::command();
    let bin_name = bin_name.get_bin_name().unwrap_or("this command");

    // macos has issues w/ stdin piped in.
    // https://github.com/crossterm-rs/crossterm/issues/396
    if cfg!(target_os = "macos") {
        match (
            r3bl_select::is_stdin_piped(),
            r3bl_select::is_stdout_piped(),
        ) {
            (StdinIsPipedResult::StdinIsPiped, _) => {
                show_error_stdin_pipe_does_not_work_on_macos();
            }
            (_, StdoutIsPipedResult::StdoutIsPiped) => {
                show_error_do_not_pipe_stdout(bin_name);
            }
            (
                StdinIsPipedResult::StdinIsNotPiped,
                StdoutIsPipedResult::StdoutIsNotPiped,
            ) => {
                print_help()?;
            }
        }
    }
    // Linux works fine.
    else {
        match (
            r3bl_select::is_stdin_piped(),
            r3bl_select::is_stdout_piped(),
        ) {
            (StdinIsPipedResult::StdinIsPiped, StdoutIsPipedResult::StdoutIsNotPiped) => {
                show_tui(cli_args)?;
            }
            (StdinIsPipedResult::StdinIsPiped, StdoutIsPipedResult::StdoutIsPiped) => {
                show_error_do_not_pipe_stdout(bin_name);
            }
            (
                StdinIsPipedResult::StdinIsNotPiped,
                StdoutIsPipedResult::StdoutIsPiped,
            ) => {
                show_error_need_to_pipe_stdin(bin_name);
                show_error_do_not_pipe_stdout(bin_name);
            }
            (
                StdinIsPipedResult::StdinIsNotPiped,
                StdoutIsPipedResult::StdoutIsNotPiped,
            ) => {
                show_error_need_to_pipe_stdin(bin_name);
            }
        }
    }

    Ok(())
}

fn show_error_stdin_pipe_does_not_work_on_macos() {
    println!(
        "Unfortunately at this time macOS `stdin` pipe does not work on macOS.\
         \nhttps://github.com/crossterm-rs/crossterm/issues/396"
    );
}

fn show_error_need_to_pipe_stdin(bin_name: &str) {
    println!(
        "Please pipe the output of another command into {bin_name}. \
         \n✅ For example: `ls -1 | {bin_name}`"
    );
}

fn show_error_do_not_pipe_stdout(bin_name: &str) {
    println!(
        "Please do *not* pipe the output of {bin_name} to another command. \
         \n❎ For eg, don't do this: `ls -1 | {bin_name} | cat`"
    );
}

fn show_tui(cli_args: CliArgs) -> miette::Result<()> {
    let lines = stdin().lock().lines().flatten().collect::<Vec<String>>();

    // Early return, nothing to do. No content found in stdin.
    if lines.is_empty() {
        return Ok(());
    }

    let config = resolve_config(&cli_args)?;

    tracing::debug!(message = "show_tui", lines = %lines.len(), config = ?config);

    // Actually get input from the user.
    let maybe_selected_index =
        select_from_list(lines.clone(), config).into_diagnostic()?;

    tracing::debug!(message = "selection done", selected = ?maybe_selected_index);

    // Cancellation prints nothing.
    let Some(selected_index) = maybe_selected_index else {
        return Ok(());
    };
    let selected_item = &lines[selected_index];

    match cli_args.command_to_run_with_selection {
        Some(ref command_template) => {
            let actual_command_to_run = command_template
                .replace(SELECTED_ITEM_SYMBOL, selected_item);
            execute_command(&actual_command_to_run)?;
        }
        None => {
            println!("{selected_item}");
        }
    }

    Ok(())
}

/// Built-in defaults, overridden by the config file, overridden by explicit CLI
/// flags.
fn resolve_config(cli_args: &CliArgs) -> miette::Result<SelectConfig> {
    let file_config = match cli_args.config_file {
        Some(ref path) => {
            let text = std::fs::read_to_string(path).into_diagnostic()?;
            serde_json::from_str::<ConfigFile>(&text).into_diagnostic()?
        }
        None => ConfigFile::default(),
    };
    let file_colors = file_config.colors.unwrap_or_default();

    let defaults = SelectConfig::default();
    let default_style = StyleSheet::default();

    Ok(SelectConfig {
        max_visible: cli_args
            .tui_height
            .or(file_config.max_items)
            .unwrap_or(defaults.max_visible),
        wrap: cli_args.wrap || file_config.loops.unwrap_or(defaults.wrap),
        start_index: cli_args
            .start_index
            .or(file_config.start_key)
            .unwrap_or(defaults.start_index),
        style: StyleSheet {
            cursor_glyph: cli_args
                .cursor_glyph
                .clone()
                .or(file_config.cursor)
                .unwrap_or(default_style.cursor_glyph),
            active_color: cli_args
                .active_color
                .clone()
                .or(file_colors.active)
                .unwrap_or(default_style.active_color),
            inactive_color: cli_args
                .inactive_color
                .clone()
                .or(file_colors.inactive)
                .unwrap_or(default_style.inactive_color),
        },
    })
}

fn execute_command(cmd_str: &str) -> miette::Result<()> {
    // This let binding is required to make the code below work.
    let mut command = if cfg!(target_os = "windows") {
        Command::new("cmd")
    } else {
        Command::new("sh")
    };

    let command = if cfg!(target_os = "windows") {
        command.arg("/C").arg(cmd_str)
    } else {
        command.arg("-c").arg(cmd_str)
    };

    let output = command.output().into_diagnostic()?;
    print!("{}", String::from_utf8_lossy(&output.stdout));

    Ok(())
}

/// Programmatically prints out help.
fn print_help() -> miette::Result<()> {
    let mut cmd = CliArgs::command();
    cmd.print_help().into_diagnostic()?;
    Ok(())
}
