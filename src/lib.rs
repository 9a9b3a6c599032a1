pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod sample;
pub mod utils;

pub use adapters::console::{ScriptedConsole, StdConsole};
pub use config::CliConfig;
pub use core::menu::MenuLoop;
pub use domain::model::{Company, Department, Employee, EmployeeKind, Money};
pub use domain::ports::Console;
pub use utils::error::{DirectoryError, Result};
