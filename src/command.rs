//! Command language.
//!
//! One command per line. Verbs and direction tokens are upper case and matched
//! exactly:
//!
//! ```text
//! PLACE <x> <y> <direction>      fields separated by whitespace
//! PLACE <x>,<y>,<direction>      or by commas (spaces around commas are fine)
//! MOVE
//! LEFT
//! RIGHT
//! REPORT
//! ```
//!
//! `<direction>` is one of `N`, `NORTH`, `E`, `EAST`, `S`, `SOUTH`, `W`, `WEST`.

use crate::error::{CommandError, PlacementError};
use crate::robot::{Heading, Placement};
use std::num::IntErrorKind;

/// A parsed command.
///
/// Bounds are not checked here: a `Place` may still be off the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the table (`PLACE`).
    Place(Placement),
    /// Step one cell forward (`MOVE`).
    Move,
    /// Turn 90 degrees counter-clockwise (`LEFT`).
    Left,
    /// Turn 90 degrees clockwise (`RIGHT`).
    Right,
    /// Print the current position (`REPORT`).
    Report,
}

impl Command {
    /// Parses a single line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, args) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        let command = match verb {
            "PLACE" => return parse_place(line, args),
            "MOVE" => Self::Move,
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            "REPORT" => Self::Report,
            "" => return Err(CommandError::malformed(line, "empty command")),
            other => {
                return Err(CommandError::malformed(
                    line,
                    format!("unknown command `{other}`"),
                ));
            }
        };

        if !args.is_empty() {
            return Err(CommandError::malformed(
                line,
                format!("{verb} takes no arguments"),
            ));
        }
        Ok(command)
    }
}

fn parse_place(line: &str, args: &str) -> Result<Command, CommandError> {
    let fields: Vec<&str> = if args.contains(',') {
        args.split(',').map(str::trim).collect()
    } else {
        args.split_whitespace().collect()
    };

    let &[x, y, direction] = fields.as_slice() else {
        return Err(CommandError::malformed(
            line,
            "PLACE expects <x> <y> <direction>",
        ));
    };
    if fields
        .iter()
        .any(|f| f.is_empty() || f.contains(char::is_whitespace))
    {
        return Err(CommandError::malformed(
            line,
            "PLACE arguments must be separated by commas or by spaces",
        ));
    }

    let x = parse_coordinate(line, x)?;
    let y = parse_coordinate(line, y)?;
    let heading: Heading = direction.parse()?;

    let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
        return Err(PlacementError::OutOfBounds { x, y }.into());
    };
    Ok(Command::Place(Placement::new(x, y, heading)))
}

/// Integer too large for `i64` saturates; it is off any table either way.
fn parse_coordinate(line: &str, field: &str) -> Result<i64, CommandError> {
    field.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(CommandError::malformed(
            line,
            format!("`{field}` is not an integer"),
        )),
    })
}
