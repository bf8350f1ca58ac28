use crate::{
    core::{
        command::{Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Clone)]
pub struct WhoAmI;

impl Command for WhoAmI {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn description(&self) -> &'static str {
        "Print the current user name"
    }

    fn usage(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, _flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        Ok(toolkit.whoami())
    }
}
