//! Line commands typed into the terminal host.

use dashnav_core::{Msg, OVERVIEW_SEARCH};

pub const HELP: &str = "\
commands:
  nav <section>    click the nav link carrying <section>
  filter [text]    type into the overview filter
  clear            click the filter's clear button
  open <n>         click the timestamp of overview row <n> (1-based)
  select <value>   pick <value> in the run selector
  show             print the current view
  help             print this help
  quit             exit once pending loads finish";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let trimmed = line.trim_start();
    let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let command = match word {
        "nav" => Command::Dispatch(Msg::NavClicked {
            section: rest.trim().to_string(),
        }),
        // The raw remainder is the input value; the filter trims it itself.
        "filter" => Command::Dispatch(Msg::FilterInput {
            input_id: OVERVIEW_SEARCH.to_string(),
            value: rest.to_string(),
        }),
        "clear" => Command::Dispatch(Msg::FilterCleared {
            input_id: OVERVIEW_SEARCH.to_string(),
        }),
        "open" => {
            let row: usize = rest
                .trim()
                .parse()
                .map_err(|_| format!("open expects a row number, got {:?}", rest.trim()))?;
            if row == 0 {
                return Err("rows are numbered from 1".to_string());
            }
            Command::Dispatch(Msg::TimestampClicked { row: row - 1 })
        }
        "select" if !rest.trim().is_empty() => Command::Dispatch(Msg::RunSelected {
            value: rest.trim().to_string(),
        }),
        "select" => return Err("select expects a value".to_string()),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}; try `help`")),
    };
    Ok(Some(command))
}
