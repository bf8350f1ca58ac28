use std::collections::{HashMap, HashSet};

/// Represents command-line flags, their values, and the remaining operands
#[derive(Debug, Clone, Default)]
pub struct Flags {
    flags: HashSet<char>,
    values: HashMap<char, String>,
    positionals: Vec<String>,
}

/// Represents errors that can occur during flag parsing
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error("Invalid flag format: {0}")]
    InvalidFormat(String),
    #[error("Missing value for flag: -{0}")]
    MissingValue(char),
    #[error("Duplicate flag: -{0}")]
    DuplicateFlag(char),
    #[error("Unknown flag: -{0}")]
    UnknownFlag(char),
}

impl Flags {
    /// Parses arguments where no flag takes a value
    #[cfg(test)]
    pub fn new(args: &[&str]) -> Result<Self, FlagError> {
        Self::with_value_flags(args, &[])
    }

    /// Parses arguments, consuming the next argument as the value of any
    /// flag listed in `value_flags`
    #[cfg(test)]
    pub fn with_value_flags(args: &[&str], value_flags: &[char]) -> Result<Self, FlagError> {
        Self::parse(args, None, value_flags)
    }

    /// Parses arguments for a command that accepts exactly the letters in
    /// `switches` and `value_flags`. Any other letter is
    /// [`FlagError::UnknownFlag`].
    ///
    /// Compact groups like `-la` set every letter. Everything after a bare
    /// `--` is an operand, even if it starts with `-`.
    pub fn strict(
        args: &[&str],
        switches: &[char],
        value_flags: &[char],
    ) -> Result<Self, FlagError> {
        Self::parse(args, Some(switches), value_flags)
    }

    fn parse(
        args: &[&str],
        switches: Option<&[char]>,
        value_flags: &[char],
    ) -> Result<Self, FlagError> {
        let mut flags = HashSet::new();
        let mut values = HashMap::new();
        let mut positionals = Vec::new();
        let value_flags: HashSet<_> = value_flags.iter().copied().collect();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i];

            if arg == "--" {
                positionals.extend(args[i + 1..].iter().map(|s| s.to_string()));
                break;
            }

            if let Some(flag_chars) = arg.strip_prefix('-') {
                if flag_chars.is_empty() {
                    return Err(FlagError::InvalidFormat("Empty flag".to_string()));
                }

                for c in flag_chars.chars() {
                    let known = switches.map_or(true, |s| s.contains(&c));
                    if !known && !value_flags.contains(&c) {
                        return Err(FlagError::UnknownFlag(c));
                    }
                    if flags.contains(&c) {
                        return Err(FlagError::DuplicateFlag(c));
                    }

                    if value_flags.contains(&c) {
                        i += 1;
                        if i >= args.len() {
                            return Err(FlagError::MissingValue(c));
                        }
                        values.insert(c, args[i].to_string());
                    }
                    flags.insert(c);
                }
            } else {
                positionals.push(arg.to_string());
            }
            i += 1;
        }

        Ok(Self {
            flags,
            values,
            positionals,
        })
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }

    pub fn get_value(&self, flag: char) -> Option<&str> {
        self.values.get(&flag).map(String::as_str)
    }

    /// Arguments that are neither flags nor flag values, in order
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }
}
