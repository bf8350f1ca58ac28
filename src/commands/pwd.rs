use crate::{
    core::{
        command::{Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Clone)]
pub struct PrintWorkingDirectory;

impl Command for PrintWorkingDirectory {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print the current working directory"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, _flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        Ok(toolkit.pwd())
    }
}
