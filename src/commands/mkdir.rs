use crate::{
    core::{
        command::{required, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeDirOptions {
    pub dir_name: String,
    pub parents: bool,
    pub verbose: bool,
    /// Permission bits, e.g. `0o755`
    pub mode: Option<u32>,
}

impl MakeDirOptions {
    pub fn new(dir_name: impl Into<String>) -> Self {
        Self {
            dir_name: dir_name.into(),
            ..Default::default()
        }
    }

    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["mkdir".to_string()];
        if self.parents {
            argv.push("-p".to_string());
        }
        if self.verbose {
            argv.push("-v".to_string());
        }
        if let Some(mode) = self.mode {
            argv.push(format!("-m{:o}", mode));
        }
        argv.push("--".to_string());
        argv.push(self.dir_name.clone());
        argv
    }
}

impl TryFrom<&Flags> for MakeDirOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        let mode = flags
            .get_value('m')
            .map(|value| {
                u32::from_str_radix(value, 8).map_err(|_| CommandError::InvalidArgument {
                    command: "mkdir",
                    what: "octal mode",
                    value: value.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            dir_name: required(flags, 0, "mkdir", "directory name")?.to_string(),
            parents: flags.has_flag('p'),
            verbose: flags.has_flag('v'),
            mode,
        })
    }
}

#[derive(Clone)]
pub struct MakeDirectory;

impl Command for MakeDirectory {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn description(&self) -> &'static str {
        "Create a directory"
    }

    fn usage(&self) -> &'static str {
        "mkdir [-p] [-v] [-m MODE] DIR"
    }

    fn switches(&self) -> &'static [char] {
        &['p', 'v']
    }

    fn value_flags(&self) -> &'static [char] {
        &['m']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = MakeDirOptions::try_from(flags)?;
        Ok(toolkit.mkdir(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_is_octal() {
        let options = MakeDirOptions {
            parents: true,
            mode: Some(0o755),
            ..MakeDirOptions::new("a/b")
        };
        assert_eq!(options.argv(), vec!["mkdir", "-p", "-m755", "--", "a/b"]);
    }

    #[test]
    fn test_from_flags() {
        let flags = Flags::with_value_flags(&["-pv", "-m", "700", "dir"], &['m']).unwrap();
        let options = MakeDirOptions::try_from(&flags).unwrap();
        assert!(options.parents);
        assert!(options.verbose);
        assert_eq!(options.mode, Some(0o700));
        assert_eq!(options.dir_name, "dir");
    }

    #[test]
    fn test_bad_mode() {
        let flags = Flags::with_value_flags(&["-m", "999", "dir"], &['m']).unwrap();
        assert!(matches!(
            MakeDirOptions::try_from(&flags),
            Err(CommandError::InvalidArgument { what: "octal mode", .. })
        ));
    }

    #[test]
    fn test_missing_dir() {
        let flags = Flags::new(&["-p"]).unwrap();
        assert!(matches!(
            MakeDirOptions::try_from(&flags),
            Err(CommandError::MissingArgument { .. })
        ));
    }
}
