mod command;
mod run;

pub use command::*;
pub use run::*;
