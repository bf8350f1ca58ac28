use std::str::FromStr;

use crate::{
    core::{
        command::{parse_flag, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

/// Ordering for `ls` output; `Name` is the utility's default order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Size,
    Time,
    Extension,
}

impl SortKey {
    fn flag(self) -> Option<&'static str> {
        match self {
            SortKey::Name => None,
            SortKey::Size => Some("-S"),
            SortKey::Time => Some("-t"),
            SortKey::Extension => Some("-X"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "size" => Ok(SortKey::Size),
            "time" => Ok(SortKey::Time),
            "extension" | "ext" => Ok(SortKey::Extension),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub path: String,
    pub long_format: bool,
    pub all_files: bool,
    pub sort_by: Option<SortKey>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            path: ".".to_string(),
            long_format: false,
            all_files: false,
            sort_by: None,
        }
    }
}

impl ListOptions {
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["ls".to_string()];
        if self.long_format {
            argv.push("-l".to_string());
        }
        if self.all_files {
            argv.push("-a".to_string());
        }
        if let Some(flag) = self.sort_by.and_then(SortKey::flag) {
            argv.push(flag.to_string());
        }
        argv.push("--".to_string());
        argv.push(self.path.clone());
        argv
    }
}

impl TryFrom<&Flags> for ListOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        Ok(Self {
            path: flags.positional(0).unwrap_or(".").to_string(),
            long_format: flags.has_flag('l'),
            all_files: flags.has_flag('a'),
            sort_by: parse_flag(flags, 's', "ls", "sort key")?,
        })
    }
}

#[derive(Clone)]
pub struct ListDirectory;

impl Command for ListDirectory {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents"
    }

    fn usage(&self) -> &'static str {
        "ls [-l] [-a] [-s name|size|time|extension] [PATH]"
    }

    fn switches(&self) -> &'static [char] {
        &['l', 'a']
    }

    fn value_flags(&self) -> &'static [char] {
        &['s']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = ListOptions::try_from(flags)?;
        Ok(toolkit.ls(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_argv() {
        assert_eq!(ListOptions::default().argv(), vec!["ls", "--", "."]);
    }

    #[test]
    fn test_all_options() {
        let options = ListOptions {
            path: "/tmp".to_string(),
            long_format: true,
            all_files: true,
            sort_by: Some(SortKey::Size),
        };
        assert_eq!(options.argv(), vec!["ls", "-l", "-a", "-S", "--", "/tmp"]);
    }

    #[test]
    fn test_sort_by_name_adds_no_flag() {
        let options = ListOptions {
            sort_by: Some(SortKey::Name),
            ..Default::default()
        };
        assert_eq!(options.argv(), vec!["ls", "--", "."]);
    }

    #[test]
    fn test_from_flags() {
        let flags = Flags::with_value_flags(&["-la", "-s", "time", "/var"], &['s']).unwrap();
        let options = ListOptions::try_from(&flags).unwrap();
        assert_eq!(options.argv(), vec!["ls", "-l", "-a", "-t", "--", "/var"]);
    }

    #[test]
    fn test_invalid_sort_key() {
        let flags = Flags::with_value_flags(&["-s", "colour"], &['s']).unwrap();
        let err = ListOptions::try_from(&flags).unwrap_err();
        assert_eq!(err.to_string(), "ls: invalid sort key 'colour'");
    }
}
