pub mod command;
pub mod completer;
pub mod executor;
pub mod flags;
pub mod outcome;
pub mod registry;
