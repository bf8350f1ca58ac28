use crate::{
    core::{
        command::{required, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchOptions {
    pub file_name: String,
    /// Only update timestamps of existing files (`-c`)
    pub no_create: bool,
}

impl TouchOptions {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            no_create: false,
        }
    }

    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["touch".to_string()];
        if self.no_create {
            argv.push("-c".to_string());
        }
        argv.push("--".to_string());
        argv.push(self.file_name.clone());
        argv
    }
}

impl TryFrom<&Flags> for TouchOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        Ok(Self {
            file_name: required(flags, 0, "touch", "file name")?.to_string(),
            no_create: flags.has_flag('c'),
        })
    }
}

#[derive(Clone)]
pub struct Touch;

impl Command for Touch {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn description(&self) -> &'static str {
        "Create a file or update its timestamps"
    }

    fn usage(&self) -> &'static str {
        "touch [-c] FILE"
    }

    fn switches(&self) -> &'static [char] {
        &['c']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = TouchOptions::try_from(flags)?;
        Ok(toolkit.touch(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv() {
        assert_eq!(TouchOptions::new("f").argv(), vec!["touch", "--", "f"]);

        let flags = Flags::new(&["-c", "f"]).unwrap();
        let options = TouchOptions::try_from(&flags).unwrap();
        assert_eq!(options.argv(), vec!["touch", "-c", "--", "f"]);
    }
}
