use crate::{
    core::{
        command::{Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Clone)]
pub struct ChangeDirectory;

impl Command for ChangeDirectory {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change the directory commands run in"
    }

    fn usage(&self) -> &'static str {
        "cd [PATH]"
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        Ok(toolkit.cd(flags.positional(0)))
    }
}
