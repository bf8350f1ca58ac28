use colored::{ColoredString, Colorize};

use crate::core::outcome::Outcome;

const RULE_WIDTH: usize = 33;

fn colorize_success(succeeded: bool) -> ColoredString {
    if succeeded {
        "true".green()
    } else {
        "false".red()
    }
}

/// Formats an outcome as a delimited block for the terminal.
pub fn render_outcome(outcome: &Outcome) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let return_code = outcome
        .exit_status()
        .map(|code| code.to_string())
        .unwrap_or_default();

    let mut lines = vec![
        rule.clone(),
        format!("Command: {}", outcome.command),
        format!("Success: {}", colorize_success(outcome.succeeded())),
        format!("Return Code: {}", return_code),
        rule.clone(),
    ];

    if let Some(stdout) = outcome.stdout().filter(|s| !s.is_empty()) {
        lines.push("Output:".to_string());
        lines.push(stdout.trim_end().to_string());
    }
    if let Some(stderr) = outcome.stderr().filter(|s| !s.is_empty()) {
        lines.push("Error:".to_string());
        lines.push(stderr.trim_end().red().to_string());
    }
    if let Some(detail) = outcome.error_detail() {
        lines.push("Error:".to_string());
        lines.push(detail.red().to_string());
    }
    if let Some(summary) = &outcome.summary {
        lines.push("Summary:".to_string());
        lines.extend(summary.iter().map(|(key, value)| format!("  {}: {}", key, value)));
    }

    lines.push(rule);
    lines.join("\n")
}

/// One line per logged outcome, numbered from 1.
pub fn render_log(log: &[Outcome]) -> String {
    log.iter()
        .enumerate()
        .map(|(i, outcome)| {
            let status = match (outcome.exit_status(), outcome.error_detail()) {
                (Some(code), _) => format!("exit {}", code),
                (None, Some(detail)) => detail,
                (None, None) => String::new(),
            };
            format!("{:>4}  {}  [{}]", i + 1, outcome.command, status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
