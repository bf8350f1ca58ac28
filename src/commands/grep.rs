use crate::{
    core::{
        command::{required, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrepOptions {
    pub pattern: String,
    pub file_path: String,
    pub ignore_case: bool,
    pub recursive: bool,
}

impl GrepOptions {
    pub fn new(pattern: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["grep".to_string()];
        if self.ignore_case {
            argv.push("-i".to_string());
        }
        if self.recursive {
            argv.push("-r".to_string());
        }
        argv.push("--".to_string());
        argv.push(self.pattern.clone());
        argv.push(self.file_path.clone());
        argv
    }
}

impl TryFrom<&Flags> for GrepOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        Ok(Self {
            pattern: required(flags, 0, "grep", "pattern")?.to_string(),
            file_path: required(flags, 1, "grep", "path")?.to_string(),
            ignore_case: flags.has_flag('i'),
            recursive: flags.has_flag('r'),
        })
    }
}

#[derive(Clone)]
pub struct Grep;

impl Command for Grep {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn description(&self) -> &'static str {
        "Search files for a pattern"
    }

    fn usage(&self) -> &'static str {
        "grep [-i] [-r] PATTERN PATH"
    }

    fn switches(&self) -> &'static [char] {
        &['i', 'r']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = GrepOptions::try_from(flags)?;
        Ok(toolkit.grep(&options))
    }
}
