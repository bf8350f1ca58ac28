use crate::{
    core::{
        command::{required, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChmodOptions {
    pub path: String,
    /// Numeric or symbolic mode, e.g. `755` or `u+rwx`
    pub mode: String,
    pub recursive: bool,
    pub verbose: bool,
}

impl ChmodOptions {
    pub fn new(mode: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: mode.into(),
            ..Default::default()
        }
    }

    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["chmod".to_string()];
        if self.recursive {
            argv.push("-R".to_string());
        }
        if self.verbose {
            argv.push("-v".to_string());
        }
        argv.push("--".to_string());
        argv.push(self.mode.clone());
        argv.push(self.path.clone());
        argv
    }
}

impl TryFrom<&Flags> for ChmodOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        Ok(Self {
            mode: required(flags, 0, "chmod", "mode")?.to_string(),
            path: required(flags, 1, "chmod", "path")?.to_string(),
            recursive: flags.has_flag('R'),
            verbose: flags.has_flag('v'),
        })
    }
}

#[derive(Clone)]
pub struct ChangeMode;

impl Command for ChangeMode {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn description(&self) -> &'static str {
        "Change file permissions"
    }

    fn usage(&self) -> &'static str {
        "chmod [-R] [-v] MODE PATH"
    }

    fn switches(&self) -> &'static [char] {
        &['R', 'v']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = ChmodOptions::try_from(flags)?;
        Ok(toolkit.chmod(&options))
    }
}
