use std::path::PathBuf;

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

pub struct CommandCompleter {
    commands: Vec<String>,
    current_dir: PathBuf,
}

impl CommandCompleter {
    pub fn new(commands: Vec<&'static str>, current_dir: PathBuf) -> Self {
        Self {
            commands: commands.into_iter().map(String::from).collect(),
            current_dir,
        }
    }

    /// File names are completed relative to this directory
    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = line[..pos].rfind(' ').map(|i| i + 1).unwrap_or(0);
        let word = &line[start..pos];
        let mut matches = Vec::new();

        // Only match commands if we're at the start of the line
        if start == 0 {
            matches.extend(
                self.commands
                    .iter()
                    .filter(|cmd| cmd.starts_with(word))
                    .map(|cmd| Pair {
                        display: cmd.clone(),
                        replacement: cmd.clone(),
                    }),
            );
            if !matches.is_empty() {
                return (start, matches);
            }
        }

        let (dir_part, file_part) = match word.rfind('/') {
            Some(i) => (&word[..=i], &word[i + 1..]),
            None => ("", word),
        };
        let search_dir = if dir_part.is_empty() {
            self.current_dir.clone()
        } else {
            self.current_dir.join(dir_part)
        };

        if let Ok(entries) = std::fs::read_dir(search_dir) {
            matches.extend(
                entries
                    .filter_map(Result::ok)
                    .filter_map(|entry| {
                        let name = entry.file_name().to_string_lossy().to_string();
                        if !name.starts_with(file_part) {
                            return None;
                        }
                        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
                        let display = if is_dir { format!("{}/", name) } else { name.clone() };
                        Some(Pair {
                            replacement: format!("{}{}", dir_part, display),
                            display,
                        })
                    }),
            );
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        (start, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok(self.candidates(line, pos))
    }
}

impl Validator for CommandCompleter {}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (CommandCompleter, TempDir) {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(tmp_dir.path().join("src")).unwrap();
        fs::write(tmp_dir.path().join("src/main.rs"), "").unwrap();
        fs::write(tmp_dir.path().join("setup.cfg"), "").unwrap();
        let completer = CommandCompleter::new(
            vec!["cd", "chmod", "chown", "ls"],
            tmp_dir.path().to_path_buf(),
        );
        (completer, tmp_dir)
    }

    fn replacements(pairs: &[Pair]) -> Vec<&str> {
        pairs.iter().map(|p| p.replacement.as_str()).collect()
    }

    #[test]
    fn test_command_prefix() {
        let (completer, _tmp_dir) = setup();
        let (start, pairs) = completer.candidates("ch", 2);
        assert_eq!(start, 0);
        assert_eq!(replacements(&pairs), vec!["chmod", "chown"]);
    }

    #[test]
    fn test_file_argument() {
        let (completer, _tmp_dir) = setup();
        let (start, pairs) = completer.candidates("ls s", 4);
        assert_eq!(start, 3);
        assert_eq!(replacements(&pairs), vec!["setup.cfg", "src/"]);
    }

    #[test]
    fn test_nested_path() {
        let (completer, _tmp_dir) = setup();
        let (_, pairs) = completer.candidates("cd src/m", 8);
        assert_eq!(replacements(&pairs), vec!["src/main.rs"]);
    }
}
