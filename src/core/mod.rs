pub mod menu;

pub use crate::domain::model::{Company, Department, Employee, Money};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
