use colored::Colorize;
use os_release::OsRelease;
use rustyline::{error::ReadlineError, history::FileHistory, Editor};
use std::{
    env,
    error::Error,
    io::{self, Write},
    path::PathBuf,
};
use tracing::{debug, warn};

use crate::{
    core::{command::CommandError, completer::CommandCompleter, registry::CommandRegistry},
    toolkit::Toolkit,
    utils,
};

/// Verbs handled by the prompt itself rather than the registry
const PROMPT_BUILTINS: [&str; 4] = ["exit", "quit", "help", "history"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Line handling for the prompt, independent of the terminal
pub struct Session {
    registry: CommandRegistry,
    toolkit: Toolkit,
}

impl Session {
    pub fn new(toolkit: Toolkit) -> Self {
        Self {
            registry: CommandRegistry::setup(),
            toolkit,
        }
    }

    pub fn toolkit(&self) -> &Toolkit {
        &self.toolkit
    }

    /// Everything worth offering for tab completion
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names = self.registry.get_commands();
        names.extend(PROMPT_BUILTINS);
        names.sort_unstable();
        names
    }

    /// Runs every `;`-separated command on the line, in order.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Control> {
        for command in transform_input(line) {
            let parts: Vec<String> = parse_args(&command)
                .iter()
                .map(|part| expand_tilde(part))
                .collect();
            let Some((verb, args)) = parts.split_first() else {
                continue;
            };
            let args: Vec<&str> = args.iter().map(String::as_str).collect();

            if let (Control::Exit, _) = self.run_builtin(verb, &args, out)? {
                return Ok(Control::Exit);
            }
        }
        Ok(Control::Continue)
    }

    /// Runs one already-split command and reports whether it succeeded.
    pub fn run_once<W: Write>(&mut self, argv: &[String], out: &mut W) -> io::Result<bool> {
        let Some((verb, args)) = argv.split_first() else {
            return Ok(false);
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let (_, succeeded) = self.run_builtin(verb, &args, out)?;
        Ok(succeeded)
    }

    /// Handles prompt builtins, otherwise dispatches to the registry.
    /// The flag is false only when a dispatched command failed.
    fn run_builtin<W: Write>(
        &mut self,
        verb: &str,
        args: &[&str],
        out: &mut W,
    ) -> io::Result<(Control, bool)> {
        match verb.to_lowercase().as_str() {
            "exit" | "quit" => {
                writeln!(out, "Exiting interactive mode. Goodbye!")?;
                return Ok((Control::Exit, true));
            }
            "help" => self.print_help(args.first().copied(), out)?,
            "history" => {
                if self.toolkit.log().is_empty() {
                    writeln!(out, "No commands run yet")?;
                } else {
                    writeln!(out, "{}", utils::render_log(self.toolkit.log()))?;
                }
            }
            _ => {
                let succeeded = self.dispatch(verb, args, out)?;
                return Ok((Control::Continue, succeeded));
            }
        }
        Ok((Control::Continue, true))
    }

    fn dispatch<W: Write>(&mut self, verb: &str, args: &[&str], out: &mut W) -> io::Result<bool> {
        match self.registry.dispatch(verb, args, &mut self.toolkit) {
            Ok(outcome) => {
                writeln!(out, "{}", utils::render_outcome(&outcome))?;
                Ok(outcome.succeeded())
            }
            Err(e @ CommandError::Unknown(_)) => {
                writeln!(out, "{}", e)?;
                Ok(false)
            }
            Err(e) => {
                debug!(error = %e, "command rejected");
                writeln!(out, "Error: {}", e)?;
                if let Some(cmd) = self.registry.get(verb) {
                    writeln!(out, "usage: {}", cmd.usage())?;
                }
                Ok(false)
            }
        }
    }

    fn print_help<W: Write>(&self, topic: Option<&str>, out: &mut W) -> io::Result<()> {
        if let Some(cmd) = topic.and_then(|name| self.registry.get(name)) {
            writeln!(out, "{} - {}", cmd.name(), cmd.description())?;
            return writeln!(out, "usage: {}", cmd.usage());
        }

        for name in self.registry.get_commands() {
            if let Some(cmd) = self.registry.get(name) {
                writeln!(out, "{:<8} {}", name, cmd.description())?;
            }
        }
        writeln!(out, "{:<8} {}", "history", "Show every command run this session")?;
        writeln!(out, "{:<8} {}", "help", "Show this list, or `help NAME` for usage")?;
        writeln!(out, "{:<8} {}", "exit", "Leave interactive mode")
    }
}

/// The interactive front-end
pub struct Shell {
    editor: Editor<CommandCompleter, FileHistory>,
    session: Session,
    history_path: Option<PathBuf>,
}

impl Shell {
    pub fn new(session: Session, history_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let mut editor = Editor::new()?;
        let completer =
            CommandCompleter::new(session.command_names(), session.toolkit().current_dir());
        editor.set_helper(Some(completer));

        if let Some(path) = &history_path {
            // A missing history file just means a first run
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            session,
            history_path,
        })
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        println!("Welcome to the Linux Command Toolkit Interactive Mode!");
        println!("Type 'help' for commands, 'exit' to quit.");

        loop {
            let prompt = self.get_prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    self.editor.add_history_entry(line.as_str()).unwrap_or_default();
                    let control = self.session.handle_line(&line, &mut io::stdout())?;
                    io::stdout().flush().unwrap_or_default();
                    if control == Control::Exit {
                        break;
                    }

                    let current_dir = self.session.toolkit().current_dir();
                    if let Some(helper) = self.editor.helper_mut() {
                        helper.set_current_dir(current_dir);
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "failed to save input history");
            }
        }
    }

    fn get_prompt(&self) -> String {
        let username = env::var("USER").unwrap_or_else(|_| "user".to_string());
        let distro = OsRelease::new()
            .map(|os| os.name)
            .unwrap_or_else(|_| "unknown".to_string());

        let current_dir = self.session.toolkit().current_dir().display().to_string();
        let current_dir = match dirs::home_dir() {
            Some(home) => current_dir.replacen(&home.display().to_string(), "~", 1),
            None => current_dir,
        };

        format!(
            "{}@{} {} lct> ",
            username.bright_green(),
            distro.green(),
            current_dir.bright_blue()
        )
    }
}

/// Drops `#` comments and splits the line on `;`.
fn transform_input(input: &str) -> Vec<String> {
    let transformed = match input.split('#').next() {
        Some(cmd) => cmd.trim(),
        None => "",
    };

    transformed
        .split(';')
        .map(|cmd| cmd.trim().to_string())
        .filter(|cmd| !cmd.is_empty())
        .collect()
}

fn expand_tilde(arg: &str) -> String {
    if arg == "~" || arg.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return arg.replacen('~', &home.display().to_string(), 1);
        }
    }
    arg.to_string()
}

/// Splits on spaces; double quotes group words and are removed.
fn parse_args(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current_part = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ' ' | '\t' if !in_quotes => {
                if !current_part.is_empty() {
                    parts.push(std::mem::take(&mut current_part));
                }
            }
            _ => current_part.push(c),
        }
    }

    if !current_part.is_empty() {
        parts.push(current_part);
    }

    parts
}
