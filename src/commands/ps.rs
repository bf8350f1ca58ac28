use crate::{
    core::{
        command::{Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessListOptions {
    /// Only processes whose command name matches (`-C`)
    pub filter: Option<String>,
    pub show_all: bool,
    pub format_fields: Vec<String>,
}

impl ProcessListOptions {
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["ps".to_string()];
        if self.show_all {
            argv.push("-e".to_string());
        }
        if let Some(filter) = &self.filter {
            argv.push("-C".to_string());
            argv.push(filter.clone());
        }
        if !self.format_fields.is_empty() {
            argv.push("-o".to_string());
            argv.push(self.format_fields.join(","));
        }
        argv
    }
}

impl TryFrom<&Flags> for ProcessListOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        let format_fields = flags
            .get_value('o')
            .map(|fields| {
                fields
                    .split(',')
                    .map(str::trim)
                    .filter(|field| !field.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            filter: flags.get_value('C').map(str::to_string),
            show_all: flags.has_flag('e'),
            format_fields,
        })
    }
}

#[derive(Clone)]
pub struct ProcessStatus;

impl Command for ProcessStatus {
    fn name(&self) -> &'static str {
        "ps"
    }

    fn description(&self) -> &'static str {
        "List running processes"
    }

    fn usage(&self) -> &'static str {
        "ps [-e] [-C NAME] [-o FIELD,FIELD...]"
    }

    fn switches(&self) -> &'static [char] {
        &['e']
    }

    fn value_flags(&self) -> &'static [char] {
        &['C', 'o']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = ProcessListOptions::try_from(flags)?;
        Ok(toolkit.ps(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_argv() {
        assert_eq!(ProcessListOptions::default().argv(), vec!["ps"]);
    }

    #[test]
    fn test_from_flags() {
        let flags =
            Flags::with_value_flags(&["-e", "-C", "sshd", "-o", "pid, comm"], &['C', 'o']).unwrap();
        let options = ProcessListOptions::try_from(&flags).unwrap();
        assert_eq!(
            options.argv(),
            vec!["ps", "-e", "-C", "sshd", "-o", "pid,comm"]
        );
    }
}
