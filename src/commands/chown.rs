use crate::{
    core::{
        command::{required, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChownOptions {
    pub path: String,
    pub owner: String,
    pub group: Option<String>,
    pub recursive: bool,
}

impl ChownOptions {
    pub fn new(owner: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            owner: owner.into(),
            ..Default::default()
        }
    }

    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["chown".to_string()];
        if self.recursive {
            argv.push("-R".to_string());
        }
        argv.push("--".to_string());
        match &self.group {
            Some(group) => argv.push(format!("{}:{}", self.owner, group)),
            None => argv.push(self.owner.clone()),
        }
        argv.push(self.path.clone());
        argv
    }
}

impl TryFrom<&Flags> for ChownOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        Ok(Self {
            owner: required(flags, 0, "chown", "owner")?.to_string(),
            path: required(flags, 1, "chown", "path")?.to_string(),
            group: flags.get_value('g').map(str::to_string),
            recursive: flags.has_flag('R'),
        })
    }
}

#[derive(Clone)]
pub struct ChangeOwner;

impl Command for ChangeOwner {
    fn name(&self) -> &'static str {
        "chown"
    }

    fn description(&self) -> &'static str {
        "Change file owner and group"
    }

    fn usage(&self) -> &'static str {
        "chown [-R] [-g GROUP] OWNER PATH"
    }

    fn switches(&self) -> &'static [char] {
        &['R']
    }

    fn value_flags(&self) -> &'static [char] {
        &['g']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = ChownOptions::try_from(flags)?;
        Ok(toolkit.chown(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_only() {
        assert_eq!(
            ChownOptions::new("alice", "f").argv(),
            vec!["chown", "--", "alice", "f"]
        );
    }

    #[test]
    fn test_owner_and_group() {
        let flags = Flags::with_value_flags(&["-R", "-g", "staff", "alice", "dir"], &['g']).unwrap();
        let options = ChownOptions::try_from(&flags).unwrap();
        assert_eq!(options.argv(), vec!["chown", "-R", "--", "alice:staff", "dir"]);
    }
}
