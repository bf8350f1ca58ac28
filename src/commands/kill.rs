use crate::{
    core::{
        command::{parse, required, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

pub const DEFAULT_SIGNAL: &str = "TERM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillOptions {
    pub pid: u32,
    /// Signal name or number, without the leading dash
    pub signal: String,
}

impl KillOptions {
    pub fn new(pid: u32) -> Self {
        Self {
            pid,
            signal: DEFAULT_SIGNAL.to_string(),
        }
    }

    pub fn argv(&self) -> Vec<String> {
        vec![
            "kill".to_string(),
            format!("-{}", self.signal),
            self.pid.to_string(),
        ]
    }
}

impl TryFrom<&Flags> for KillOptions {
    type Error = CommandError;

    fn try_from(flags: &Flags) -> Result<Self, Self::Error> {
        let pid = parse(required(flags, 0, "kill", "pid")?, "kill", "pid")?;
        let signal = flags
            .get_value('s')
            .map(|s| s.trim_start_matches('-').to_uppercase())
            .unwrap_or_else(|| DEFAULT_SIGNAL.to_string());

        Ok(Self { pid, signal })
    }
}

#[derive(Clone)]
pub struct Kill;

impl Command for Kill {
    fn name(&self) -> &'static str {
        "kill"
    }

    fn description(&self) -> &'static str {
        "Send a signal to a process"
    }

    fn usage(&self) -> &'static str {
        "kill [-s SIGNAL] PID"
    }

    fn value_flags(&self) -> &'static [char] {
        &['s']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = KillOptions::try_from(flags)?;
        Ok(toolkit.kill(&options))
    }
}
