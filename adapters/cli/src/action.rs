use std::str::FromStr;

use ninja_puzzles_core::{CellColor, CellCoord};
use thiserror::Error;

/// Player action typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Leave the welcome screen.
    Start,
    /// Dismiss the tutorial dialog.
    Continue,
    /// Pick a palette entry.
    Color(CellColor),
    /// Paint a canvas cell.
    Paint(CellCoord),
    /// Clear the canvas.
    Reset,
    /// Pick a choice by zero-based position.
    Select(usize),
    /// Submit the canvas or the selected choice.
    Submit,
    /// Show the level hint.
    Hint,
    /// Skip the rest of the success pause.
    Wait,
    /// Print a session transfer code.
    Export,
    /// Ask to abandon the playthrough.
    Exit,
    /// Confirm a pending question.
    Yes,
    /// Decline a pending question.
    No,
    /// Abandon the playthrough without asking.
    Restart,
    /// Show the action reference.
    Help,
    /// Close the program.
    Quit,
}

/// Reasons a typed line is not an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum ActionError {
    /// Nothing was typed.
    #[error("type an action, or 'help' to list them")]
    Empty,
    /// The first word is not an action.
    #[error("unknown action '{0}', type 'help' to list actions")]
    Unknown(String),
    /// The action needs more arguments.
    #[error("usage: {0}")]
    Usage(&'static str),
    /// The action takes no arguments but some were typed.
    #[error("'{0}' takes no arguments")]
    UnexpectedArguments(String),
    /// The palette index is outside 0-5.
    #[error("color {0} is not on the palette (0-5)")]
    UnknownColor(u8),
}

/// Reference printed by the `help` action.
pub(crate) const HELP: &str = "\
start            begin the mission
ok               dismiss the tutorial
color <0-5>      pick a paint color
paint <row> <col>  paint a cell (painting the same color erases it)
reset            clear the canvas
select <n>       pick answer n
submit           check your answer
hint             show a hint for this level
wait             skip the celebration pause
export           print a code to resume this session later
exit             return home (asks for confirmation)
restart          return home immediately
help             show this list
quit             close the program";

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ActionError::Empty);
        };
        let arguments: Vec<&str> = words.collect();

        let action = match (verb.to_ascii_lowercase().as_str(), arguments.as_slice()) {
            ("start", []) => Self::Start,
            ("ok", []) => Self::Continue,
            ("color", [index]) => {
                let index: u8 = parse_number(index, "color <0-5>")?;
                Self::Color(CellColor::from_index(index).ok_or(ActionError::UnknownColor(index))?)
            }
            ("color", _) => return Err(ActionError::Usage("color <0-5>")),
            ("paint", [row, column]) => {
                let row = parse_number(row, "paint <row> <col>")?;
                let column = parse_number(column, "paint <row> <col>")?;
                Self::Paint(CellCoord::new(column, row))
            }
            ("paint", _) => return Err(ActionError::Usage("paint <row> <col>")),
            ("reset", []) => Self::Reset,
            ("select", [position]) => {
                let position: usize = parse_number(position, "select <n>")?;
                let index = position
                    .checked_sub(1)
                    .ok_or(ActionError::Usage("select <n>"))?;
                Self::Select(index)
            }
            ("select", _) => return Err(ActionError::Usage("select <n>")),
            ("submit", []) => Self::Submit,
            ("hint", []) => Self::Hint,
            ("wait", []) => Self::Wait,
            ("export", []) => Self::Export,
            ("exit", []) => Self::Exit,
            ("yes" | "y", []) => Self::Yes,
            ("no" | "n", []) => Self::No,
            ("restart", []) => Self::Restart,
            ("help" | "?", []) => Self::Help,
            ("quit" | "q", []) => Self::Quit,
            (
                "start" | "ok" | "reset" | "submit" | "hint" | "wait" | "export" | "exit" | "yes"
                | "y" | "no" | "n" | "restart" | "help" | "?" | "quit" | "q",
                _,
            ) => return Err(ActionError::UnexpectedArguments(verb.to_owned())),
            _ => return Err(ActionError::Unknown(verb.to_owned())),
        };
        Ok(action)
    }
}

fn parse_number<T: FromStr>(word: &str, usage: &'static str) -> Result<T, ActionError> {
    word.parse().map_err(|_| ActionError::Usage(usage))
}
