//! # toy-robot
//!
//! A toy robot on a square table, driven by a tiny line-oriented command
//! language (`PLACE`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! The crate is split the same way a run flows: a [`CommandSource`] yields
//! lines, [`Command::parse`] types them, and an [`Interpreter`] owns the
//! [`Robot`] and applies each command against the [`Table`] bounds. Per-command
//! problems come back as [`CommandError`] diagnostics and never stop a run;
//! only a [`RunError`] does.
//!
//! ```
//! use toy_robot::{Interpreter, Output, Placement, Heading};
//!
//! let mut robot = Interpreter::default();
//! robot.execute_line("PLACE 0,0,NORTH");
//! robot.execute_line("MOVE");
//! let report = robot.execute_line("REPORT");
//! assert_eq!(
//!     report.output,
//!     Some(Output::Position(Placement::new(0, 1, Heading::North)))
//! );
//! ```

pub mod command;
pub mod error;
pub mod interpreter;
pub mod reader;
pub mod robot;
pub mod table;

pub use command::*;
pub use error::*;
pub use interpreter::*;
pub use reader::*;
pub use robot::*;
pub use table::*;
