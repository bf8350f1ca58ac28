use std::str::FromStr;

use crate::{
    core::{
        command::{parse_flag, Command, CommandError},
        flags::Flags,
        outcome::Outcome,
    },
    toolkit::Toolkit,
};

/// Seconds between refreshes when none is configured
pub const DEFAULT_TOP_DELAY: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopSort {
    Cpu,
    Mem,
}

impl TopSort {
    fn field(self) -> &'static str {
        match self {
            TopSort::Cpu => "%CPU",
            TopSort::Mem => "%MEM",
        }
    }
}

impl FromStr for TopSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(TopSort::Cpu),
            "mem" | "memory" => Ok(TopSort::Mem),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopOptions {
    pub iterations: u32,
    /// Non-interactive output; anything else waits on a terminal that
    /// is never attached
    pub batch_mode: bool,
    pub sort_by: Option<TopSort>,
    pub delay: u64,
}

impl Default for TopOptions {
    fn default() -> Self {
        Self {
            iterations: 1,
            batch_mode: true,
            sort_by: Some(TopSort::Cpu),
            delay: DEFAULT_TOP_DELAY,
        }
    }
}

impl TopOptions {
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec!["top".to_string()];
        if self.batch_mode {
            argv.push("-b".to_string());
        }
        argv.push("-n".to_string());
        argv.push(self.iterations.to_string());
        argv.push("-d".to_string());
        argv.push(self.delay.to_string());
        if let Some(sort) = self.sort_by {
            argv.push("-o".to_string());
            argv.push(sort.field().to_string());
        }
        argv
    }

    /// Reads `-n`, `-s` and `-d`, falling back to `default_delay` for the
    /// refresh interval.
    pub fn from_flags(flags: &Flags, default_delay: u64) -> Result<Self, CommandError> {
        let defaults = Self::default();
        Ok(Self {
            iterations: parse_flag(flags, 'n', "top", "iteration count")?
                .unwrap_or(defaults.iterations),
            batch_mode: true,
            sort_by: parse_flag(flags, 's', "top", "sort field")?.or(defaults.sort_by),
            delay: parse_flag(flags, 'd', "top", "delay")?.unwrap_or(default_delay),
        })
    }
}

#[derive(Clone)]
pub struct Top;

impl Command for Top {
    fn name(&self) -> &'static str {
        "top"
    }

    fn description(&self) -> &'static str {
        "Show a snapshot of the busiest processes"
    }

    fn usage(&self) -> &'static str {
        "top [-n N] [-s cpu|mem] [-d SECS]"
    }

    fn value_flags(&self) -> &'static [char] {
        &['n', 's', 'd']
    }

    fn execute(&self, flags: &Flags, toolkit: &mut Toolkit) -> Result<Outcome, CommandError> {
        let options = TopOptions::from_flags(flags, toolkit.top_delay())?;
        Ok(toolkit.top(&options))
    }
}
