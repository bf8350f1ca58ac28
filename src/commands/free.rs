use crate::{
    core::{
        command::{Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeOptions {
    pub human_readable: bool,
}

impl Default for FreeOptions {
    fn default() -> Self {
        Self {
            human_readable: true,
        }
    }
}

impl FreeOptions {
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["free".to_string()];
        if self.human_readable {
            argv.push("-h".to_string());
        }
        argv
    }
}

impl From<&Flags> for FreeOptions {
    fn from(flags: &Flags) -> Self {
        Self {
            human_readable: !flags.has_flag('b'),
        }
    }
}

#[derive(Clone)]
pub struct Free;

impl Command for Free {
    fn name(&self) -> &'static str {
        "free"
    }

    fn description(&self) -> &'static str {
        "Show memory usage"
    }

    fn usage(&self) -> &'static str {
        "free [-b]"
    }

    fn switches(&self) -> &'static [char] {
        &['b']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        Ok(toolkit.free(&FreeOptions::from(flags)))
    }
}
