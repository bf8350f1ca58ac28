use std::collections::HashMap;

use tracing::debug;

use crate::{
    commands::{
        ChangeDirectory, ChangeMode, ChangeOwner, Find, Free, Grep, Kill, ListDirectory,
        MakeDirectory, PrintWorkingDirectory, ProcessStatus, Remove, Top, Touch, WhoAmI,
    },
    toolkit::Toolkit,
};

use super::{
    command::{Command, CommandError},
    flags::Flags,
    outcome::Outcome,
};

pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn setup() -> Self {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(WhoAmI),
            Box::new(ListDirectory),
            Box::new(PrintWorkingDirectory),
            Box::new(MakeDirectory),
            Box::new(Touch),
            Box::new(ChangeDirectory),
            Box::new(Remove),
            Box::new(ChangeMode),
            Box::new(ChangeOwner),
            Box::new(ProcessStatus),
            Box::new(Kill),
            Box::new(Top),
            Box::new(Free),
            Box::new(Grep),
            Box::new(Find),
        ];

        let mut command_map = HashMap::new();
        for cmd in commands {
            command_map.insert(cmd.name(), cmd);
        }

        CommandRegistry {
            commands: command_map,
        }
    }

    /// Parses `args` with the command's flag rules and runs it.
    pub fn dispatch(
        &self,
        command: &str,
        args: &[&str],
        toolkit: &mut Toolkit,
    ) -> Result<Outcome, CommandError> {
        let cmd = self
            .commands
            .get(command)
            .ok_or_else(|| CommandError::Unknown(command.to_string()))?;

        let flags = Flags::strict(args, cmd.switches(), cmd.value_flags())?;
        debug!(command, ?args, "dispatching");
        cmd.execute(&flags, toolkit)
    }

    pub fn get(&self, command: &str) -> Option<&dyn Command> {
        self.commands.get(command).map(|cmd| cmd.as_ref())
    }

    /// Command names in alphabetical order
    pub fn get_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{executor::Executor, flags::FlagError};
    use tempfile::TempDir;

    fn setup() -> (CommandRegistry, Toolkit, TempDir) {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        let toolkit = Toolkit::new(Executor::default().with_current_dir(tmp_dir.path()));
        (CommandRegistry::setup(), toolkit, tmp_dir)
    }

    #[test]
    fn test_every_builder_is_registered() {
        let (registry, _, _tmp_dir) = setup();
        assert_eq!(
            registry.get_commands(),
            vec![
                "cd", "chmod", "chown", "find", "free", "grep", "kill", "ls", "mkdir", "ps",
                "pwd", "rm", "top", "touch", "whoami"
            ]
        );
    }

    #[test]
    fn test_unknown_command() {
        let (registry, mut toolkit, _tmp_dir) = setup();
        let err = registry.dispatch("frobnicate", &[], &mut toolkit).unwrap_err();

        assert!(matches!(err, CommandError::Unknown(ref name) if name == "frobnicate"));
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
        assert!(toolkit.log().is_empty());
    }

    #[test]
    fn test_dispatch_runs_command() {
        let (registry, mut toolkit, tmp_dir) = setup();
        let outcome = registry
            .dispatch("mkdir", &["-p", "x/y"], &mut toolkit)
            .unwrap();

        assert!(outcome.succeeded());
        assert_eq!(outcome.command, "mkdir -p -- x/y");
        assert!(tmp_dir.path().join("x/y").is_dir());
    }

    #[test]
    fn test_dispatch_applies_value_flags() {
        let (registry, mut toolkit, tmp_dir) = setup();
        std::fs::write(tmp_dir.path().join("a.txt"), "").unwrap();

        let outcome = registry
            .dispatch("find", &["-n", "a.txt", "-d", "1"], &mut toolkit)
            .unwrap();
        assert_eq!(outcome.command, "find . -maxdepth 1 -name a.txt");
        assert_eq!(outcome.stdout(), Some("./a.txt\n"));
    }

    #[test]
    fn test_flag_error_is_not_logged() {
        let (registry, mut toolkit, _tmp_dir) = setup();
        let err = registry.dispatch("mkdir", &["-m"], &mut toolkit).unwrap_err();

        assert!(matches!(err, CommandError::Flags(_)));
        assert!(toolkit.log().is_empty());
    }

    #[test]
    fn test_unlisted_flag_is_rejected() {
        let (registry, mut toolkit, _tmp_dir) = setup();
        let err = registry.dispatch("ls", &["-z"], &mut toolkit).unwrap_err();

        assert_eq!(err.to_string(), "Unknown flag: -z");
        assert!(toolkit.log().is_empty());

        let err = registry.dispatch("pwd", &["-x"], &mut toolkit).unwrap_err();
        assert!(matches!(err, CommandError::Flags(FlagError::UnknownFlag('x'))));
    }

    #[test]
    fn test_dashed_operand_reaches_builder() {
        let (registry, mut toolkit, tmp_dir) = setup();
        let outcome = registry
            .dispatch("touch", &["--", "-notes"], &mut toolkit)
            .unwrap();

        assert!(outcome.succeeded());
        assert_eq!(outcome.command, "touch -- -notes");
        assert!(tmp_dir.path().join("-notes").is_file());
    }
}
