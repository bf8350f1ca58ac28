use crate::{
    core::{
        command::{parse_flag, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOptions {
    pub path: String,
    pub name_pattern: Option<String>,
    /// `f` for files, `d` for directories, and so on
    pub file_type: Option<String>,
    /// Size with a unit suffix, e.g. `10M`
    pub min_size: Option<String>,
    pub max_size: Option<String>,
    pub max_depth: Option<u32>,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            path: ".".to_string(),
            name_pattern: None,
            file_type: None,
            min_size: None,
            max_size: None,
            max_depth: None,
        }
    }
}

impl FindOptions {
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["find".to_string(), self.path.clone()];
        // find warns when a global option follows a test
        if let Some(depth) = self.max_depth {
            argv.push("-maxdepth".to_string());
            argv.push(depth.to_string());
        }
        if let Some(pattern) = &self.name_pattern {
            argv.push("-name".to_string());
            argv.push(pattern.clone());
        }
        if let Some(file_type) = &self.file_type {
            argv.push("-type".to_string());
            argv.push(file_type.clone());
        }
        if let Some(size) = &self.min_size {
            argv.push("-size".to_string());
            argv.push(format!("+{}", size));
        }
        if let Some(size) = &self.max_size {
            argv.push("-size".to_string());
            argv.push(format!("-{}", size));
        }
        argv
    }
}

impl TryFrom<&Flags> for FindOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        let value = |flag| flags.get_value(flag).map(str::to_string);
        Ok(Self {
            path: flags.positional(0).unwrap_or(".").to_string(),
            name_pattern: value('n'),
            file_type: value('t'),
            min_size: value('m'),
            max_size: value('M'),
            max_depth: parse_flag(flags, 'd', "find", "depth")?,
        })
    }
}

#[derive(Clone)]
pub struct Find;

impl Command for Find {
    fn name(&self) -> &'static str {
        "find"
    }

    fn description(&self) -> &'static str {
        "Search for files by name, type, size and depth"
    }

    fn usage(&self) -> &'static str {
        "find [-n NAME] [-t TYPE] [-m MIN] [-M MAX] [-d DEPTH] [PATH]"
    }

    fn value_flags(&self) -> &'static [char] {
        &['n', 't', 'm', 'M', 'd']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = FindOptions::try_from(flags)?;
        Ok(toolkit.find(&options))
    }
}
