use crate::{
    core::{
        command::{Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    pub paths: Vec<String>,
    pub recursive: bool,
    pub force: bool,
    /// Ask before each removal. Stdin is never attached, so `rm` sees
    /// end-of-file and keeps every file.
    pub interactive: bool,
    pub verbose: bool,
    /// Remove empty directories (`-d`)
    pub dir_mode: bool,
}

impl RemoveOptions {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["rm".to_string()];
        let switches = [
            (self.recursive, "-r"),
            (self.force, "-f"),
            (self.interactive, "-i"),
            (self.verbose, "-v"),
            (self.dir_mode, "-d"),
        ];
        argv.extend(
            switches
                .iter()
                .filter(|(on, _)| *on)
                .map(|(_, flag)| flag.to_string()),
        );
        argv.push("--".to_string());
        argv.extend(self.paths.iter().cloned());
        argv
    }
}

impl TryFrom<&Flags> for RemoveOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        if flags.positionals().is_empty() {
            return Err(CommandError::MissingArgument {
                command: "rm",
                what: "path",
            });
        }

        Ok(Self {
            paths: flags.positionals().to_vec(),
            recursive: flags.has_flag('r'),
            force: flags.has_flag('f'),
            interactive: flags.has_flag('i'),
            verbose: flags.has_flag('v'),
            dir_mode: flags.has_flag('d'),
        })
    }
}

#[derive(Clone)]
pub struct Remove;

impl Command for Remove {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn description(&self) -> &'static str {
        "Remove files or directories"
    }

    fn usage(&self) -> &'static str {
        "rm [-r] [-f] [-i] [-v] [-d] PATH..."
    }

    fn switches(&self) -> &'static [char] {
        &['r', 'f', 'i', 'v', 'd']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = RemoveOptions::try_from(flags)?;
        Ok(toolkit.rm(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_order_is_stable() {
        let flags = Flags::new(&["-vfr", "a", "b"]).unwrap();
        let options = RemoveOptions::try_from(&flags).unwrap();
        assert_eq!(options.argv(), vec!["rm", "-r", "-f", "-v", "--", "a", "b"]);
    }

    #[test]
    fn test_requires_path() {
        let flags = Flags::new(&["-rf"]).unwrap();
        assert!(RemoveOptions::try_from(&flags).is_err());
    }

    #[test]
    fn test_new() {
        let options = RemoveOptions {
            dir_mode: true,
            ..RemoveOptions::new(["empty"])
        };
        assert_eq!(options.argv(), vec!["rm", "-d", "--", "empty"]);
    }

    #[test]
    fn test_dashed_path_is_not_a_flag() {
        assert_eq!(RemoveOptions::new(["-x"]).argv(), vec!["rm", "--", "-x"]);
    }
}
