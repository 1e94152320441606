//! Interpreter that drives a [`Robot`] from command lines.
//!
//! The entry point is [`Interpreter`]. Build one from a [`RobotConfig`], then
//! feed it lines with [`Interpreter::execute_line`], or hand it a whole input
//! stream with [`Interpreter::run`].

use crate::command::Command;
use crate::error::{CommandError, PlacementError, RunError};
use crate::robot::{Placement, Robot};
use crate::table::{DEFAULT_TABLE_SIZE, Table};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

/// Notice printed in place of a report while the robot is off the table.
pub const NOT_ON_TABLE: &str = "Robot is not on the table";

/// Configuration for robot interpretation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Side length of the square table. Must be positive. Default: 5.
    pub table_size: i32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
        }
    }
}

impl RobotConfig {
    /// Checks the configuration can describe a real table.
    ///
    /// # Errors
    ///
    /// [`RunError::InvalidConfig`] if `table_size` is zero or negative.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.table_size < 1 {
            return Err(RunError::InvalidConfig(format!(
                "table size must be at least 1, got {}",
                self.table_size
            )));
        }
        Ok(())
    }
}

/// What a command prints on standard output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    /// The robot's position after the command.
    Position(Placement),
    /// The command needed a placed robot and there was none.
    NotOnTable,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(p) => fmt::Display::fmt(p, f),
            Self::NotOnTable => f.write_str(NOT_ON_TABLE),
        }
    }
}

/// Result of executing one line.
///
/// Both halves are independent: a MOVE off the edge yields a diagnostic *and*
/// a report of the unchanged position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Execution {
    /// Line for standard output, if any.
    pub output: Option<Output>,
    /// Line for standard error, if the command was rejected.
    pub diagnostic: Option<CommandError>,
}

impl Execution {
    fn report(output: Output) -> Self {
        Self {
            output: Some(output),
            diagnostic: None,
        }
    }

    fn rejected(error: CommandError) -> Self {
        Self {
            output: None,
            diagnostic: Some(error),
        }
    }
}

/// Counters for a finished [`Interpreter::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-blank lines read.
    pub lines: usize,
    /// Lines that produced a diagnostic.
    pub rejected: usize,
}

/// Owns one robot and applies commands to it.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    table: Table,
    robot: Robot,
}

impl Interpreter {
    /// Creates an interpreter with an unplaced robot.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`RobotConfig::validate`].
    pub fn new(config: RobotConfig) -> Result<Self, RunError> {
        config.validate()?;
        Ok(Self {
            table: Table::new(config.table_size),
            robot: Robot::default(),
        })
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Parses and executes one raw line.
    ///
    /// Blank lines do nothing. A line that fails to parse leaves the robot
    /// untouched and comes back as a diagnostic.
    pub fn execute_line(&mut self, raw: &str) -> Execution {
        let line = raw.trim();
        if line.is_empty() {
            return Execution::default();
        }

        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(error) => {
                debug!(line, %error, "rejected command");
                Execution::rejected(error)
            }
        }
    }

    /// Executes an already parsed command.
    ///
    /// # State machine
    ///
    /// * `Place` inside the table replaces the robot's state and reports it.
    ///   Outside the table it is rejected, whether or not the robot was placed.
    /// * `Move`, `Left`, `Right` and `Report` on an unplaced robot yield
    ///   [`Output::NotOnTable`] and change nothing.
    /// * `Move` toward the edge is rejected but still reports the position.
    pub fn execute(&mut self, command: Command) -> Execution {
        trace!(?command, robot = ?self.robot, "executing");

        match (command, self.robot.placement()) {
            (Command::Place(target), _) => self.place(target),
            (_, None) => {
                debug!(?command, "robot not on table");
                Execution::report(Output::NotOnTable)
            }
            (Command::Move, Some(current)) => self.advance(current),
            (Command::Left, Some(current)) => self.update(current.turned_left()),
            (Command::Right, Some(current)) => self.update(current.turned_right()),
            (Command::Report, Some(current)) => Execution::report(Output::Position(current)),
        }
    }

    fn place(&mut self, target: Placement) -> Execution {
        if !self.table.contains(target.position) {
            let error = CommandError::from(PlacementError::OutOfBounds {
                x: target.position.x.into(),
                y: target.position.y.into(),
            });
            debug!(%error, "placement outside table");
            return Execution::rejected(error);
        }
        self.update(target)
    }

    fn advance(&mut self, current: Placement) -> Execution {
        let ahead = current.ahead();
        if !self.table.contains(ahead) {
            let error = CommandError::IllegalMoveAttempt {
                from: current.position,
                heading: current.heading,
            };
            debug!(%error, "move blocked by table edge");
            return Execution {
                output: Some(Output::Position(current)),
                diagnostic: Some(error),
            };
        }
        self.update(Placement {
            position: ahead,
            ..current
        })
    }

    fn update(&mut self, next: Placement) -> Execution {
        self.robot.place(next);
        debug!(robot = %next, "robot updated");
        Execution::report(Output::Position(next))
    }

    /// Executes every line from `lines` in order, writing reports to `out`
    /// and diagnostics to `err`.
    ///
    /// Each line is fully handled (state updated, output written) before the
    /// next one is pulled from the iterator.
    ///
    /// # Errors
    ///
    /// Stops at the first [`RunError`] from the input, or the first failed write.
    /// Rejected commands are not errors here.
    pub fn run<I, O, E>(
        &mut self,
        lines: I,
        out: &mut O,
        err: &mut E,
    ) -> Result<RunSummary, RunError>
    where
        I: IntoIterator<Item = Result<String, RunError>>,
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        let mut summary = RunSummary::default();

        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            summary.lines += 1;

            let execution = self.execute_line(&line);
            if let Some(diagnostic) = &execution.diagnostic {
                summary.rejected += 1;
                writeln!(err, "{diagnostic}").map_err(RunError::Write)?;
            }
            if let Some(output) = &execution.output {
                writeln!(out, "{output}").map_err(RunError::Write)?;
                out.flush().map_err(RunError::Write)?;
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::Heading;
    use glam::IVec2;

    fn placed(x: i32, y: i32, heading: Heading) -> Interpreter {
        let mut interpreter = Interpreter::default();
        interpreter.execute(Command::Place(Placement::new(x, y, heading)));
        interpreter
    }

    #[test]
    fn test_place_reports_immediately() {
        let mut interpreter = Interpreter::default();
        let execution = interpreter.execute_line("PLACE 2 3 W");
        assert_eq!(
            execution.output,
            Some(Output::Position(Placement::new(2, 3, Heading::West)))
        );
        assert_eq!(execution.diagnostic, None);
    }

    #[test]
    fn test_replace_overwrites_state() {
        let mut interpreter = placed(0, 0, Heading::North);
        interpreter.execute_line("PLACE 4,4,SOUTH");
        assert_eq!(
            interpreter.robot().placement(),
            Some(Placement::new(4, 4, Heading::South))
        );
    }

    #[test]
    fn test_rejected_place_keeps_previous_state() {
        let mut interpreter = placed(1, 1, Heading::East);
        let execution = interpreter.execute_line("PLACE 7,1,NORTH");
        assert_eq!(execution.output, None);
        assert_eq!(
            execution.diagnostic,
            Some(CommandError::InvalidPlacement(PlacementError::OutOfBounds {
                x: 7,
                y: 1
            }))
        );
        assert_eq!(
            interpreter.robot().placement(),
            Some(Placement::new(1, 1, Heading::East))
        );
    }

    #[test]
    fn test_move_off_edge_reports_and_diagnoses() {
        let mut interpreter = placed(4, 2, Heading::East);
        let execution = interpreter.execute_line("MOVE");
        assert_eq!(
            execution.output,
            Some(Output::Position(Placement::new(4, 2, Heading::East)))
        );
        assert_eq!(
            execution.diagnostic,
            Some(CommandError::IllegalMoveAttempt {
                from: IVec2::new(4, 2),
                heading: Heading::East
            })
        );
    }

    #[test]
    fn test_unplaced_commands_are_noops() {
        let mut interpreter = Interpreter::default();
        for line in ["MOVE", "LEFT", "RIGHT", "REPORT"] {
            let execution = interpreter.execute_line(line);
            assert_eq!(execution.output, Some(Output::NotOnTable), "{line}");
            assert_eq!(execution.diagnostic, None, "{line}");
        }
        assert!(!interpreter.robot().is_placed());
    }

    #[test]
    fn test_unknown_verb_while_unplaced_is_diagnosed() {
        let mut interpreter = Interpreter::default();
        let execution = interpreter.execute_line("JUMP");
        assert_eq!(execution.output, None);
        assert!(matches!(
            execution.diagnostic,
            Some(CommandError::MalformedCommand { .. })
        ));
    }

    #[test]
    fn test_each_command_on_placed_robot() {
        let mut interpreter = placed(2, 2, Heading::North);
        let cases = [
            (Command::Move, Placement::new(2, 3, Heading::North)),
            (Command::Right, Placement::new(2, 3, Heading::East)),
            (Command::Move, Placement::new(3, 3, Heading::East)),
            (Command::Left, Placement::new(3, 3, Heading::North)),
            (Command::Report, Placement::new(3, 3, Heading::North)),
            (
                Command::Place(Placement::new(0, 4, Heading::West)),
                Placement::new(0, 4, Heading::West),
            ),
        ];
        for (command, expected) in cases {
            let execution = interpreter.execute(command);
            assert_eq!(execution.output, Some(Output::Position(expected)), "{command:?}");
            assert_eq!(execution.diagnostic, None, "{command:?}");
            assert_eq!(interpreter.robot().placement(), Some(expected));
        }
    }

    #[test]
    fn test_blank_line_is_silent() {
        let mut interpreter = placed(0, 0, Heading::North);
        assert_eq!(interpreter.execute_line("   "), Execution::default());
    }

    #[test]
    fn test_larger_table() {
        let mut interpreter = Interpreter::new(RobotConfig { table_size: 8 }).unwrap();
        let execution = interpreter.execute_line("PLACE 7,7,NORTH");
        assert_eq!(execution.diagnostic, None);
        assert!(interpreter.execute_line("MOVE").diagnostic.is_some());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            Interpreter::new(RobotConfig { table_size: 0 }),
            Err(RunError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_writes_streams_separately() {
        let input = ["PLACE 0,0,SOUTH", "", "MOVE", "BOGUS", "REPORT"]
            .into_iter()
            .map(|l| Ok(l.to_string()));
        let mut out = Vec::new();
        let mut err = Vec::new();

        let summary = Interpreter::default()
            .run(input, &mut out, &mut err)
            .unwrap();

        assert_eq!(summary, RunSummary { lines: 4, rejected: 2 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x=0, y=0, facing=SOUTH\nx=0, y=0, facing=SOUTH\nx=0, y=0, facing=SOUTH\n"
        );
        let err = String::from_utf8(err).unwrap();
        assert_eq!(err.lines().count(), 2);
        assert!(err.starts_with("Ignoring attempt to move robot off table"));
    }

    #[test]
    fn test_run_stops_on_read_error() {
        let input = vec![
            Ok("PLACE 0,0,N".to_string()),
            Err(RunError::Read(std::io::Error::other("boom"))),
            Ok("MOVE".to_string()),
        ];
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut interpreter = Interpreter::default();

        let result = interpreter.run(input, &mut out, &mut err);

        assert!(matches!(result, Err(RunError::Read(_))));
        assert_eq!(
            interpreter.robot().placement(),
            Some(Placement::new(0, 0, Heading::North))
        );
    }
}
