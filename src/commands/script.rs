//! Command scripts
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! add <name> <value...>
//! commit <message...>
//! rm <name>
//! checkout <hash>
//! branch [list]
//! branch create|checkout|rm <name>
//! log
//! head
//! get <name>
//! ```

use anyhow::Context;

/// A single parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, value: String },
    Commit { message: String },
    Remove { name: String },
    CheckoutHash { hash: String },
    BranchList,
    BranchCreate { name: String },
    BranchCheckout { name: String },
    BranchRemove { name: String },
    Log,
    Head,
    Get { name: String },
}

/// A command together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    pub command: Command,
}

impl Command {
    /// Parse one line, returning `None` for blank lines and comments
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (verb, rest) = split_word(line);
        let command = match verb {
            "add" => {
                let (name, value) = split_word(rest);
                Command::Add {
                    name: required(name, "add", "name")?,
                    value: required(value, "add", "value")?,
                }
            }
            "commit" => Command::Commit {
                message: required(rest, "commit", "message")?,
            },
            "rm" => Command::Remove {
                name: single(rest, "rm", "name")?,
            },
            "checkout" => Command::CheckoutHash {
                hash: single(rest, "checkout", "hash")?,
            },
            "branch" => Self::parse_branch(rest)?,
            "log" => no_arguments(rest, "log", Command::Log)?,
            "head" => no_arguments(rest, "head", Command::Head)?,
            "get" => Command::Get {
                name: single(rest, "get", "name")?,
            },
            other => anyhow::bail!("unknown command '{other}'"),
        };

        Ok(Some(command))
    }

    fn parse_branch(rest: &str) -> anyhow::Result<Self> {
        let (action, name) = split_word(rest);
        match action {
            "" | "list" => no_arguments(name, "branch list", Command::BranchList),
            "create" => Ok(Command::BranchCreate {
                name: single(name, "branch create", "name")?,
            }),
            "checkout" => Ok(Command::BranchCheckout {
                name: single(name, "branch checkout", "name")?,
            }),
            "rm" => Ok(Command::BranchRemove {
                name: single(name, "branch rm", "name")?,
            }),
            other => anyhow::bail!("unknown branch action '{other}'"),
        }
    }
}

/// Parse every line of a script
///
/// Fails on the first malformed line, naming its line number.
pub fn parse_script(script: &str) -> anyhow::Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();

    for (index, text) in script.lines().enumerate() {
        let number = index + 1;
        let command = Command::parse(text).with_context(|| format!("line {number}: {text}"))?;

        if let Some(command) = command {
            lines.push(ScriptLine {
                number,
                text: text.trim().to_string(),
                command,
            });
        }
    }

    Ok(lines)
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn required(argument: &str, command: &str, what: &str) -> anyhow::Result<String> {
    if argument.is_empty() {
        anyhow::bail!("'{command}' requires a {what}");
    }

    Ok(argument.to_string())
}

fn single(argument: &str, command: &str, what: &str) -> anyhow::Result<String> {
    let argument = required(argument, command, what)?;
    if argument.contains(char::is_whitespace) {
        anyhow::bail!("'{command}' takes a single {what}, got '{argument}'");
    }

    Ok(argument)
}

fn no_arguments(rest: &str, command: &str, parsed: Command) -> anyhow::Result<Command> {
    if !rest.is_empty() {
        anyhow::bail!("'{command}' takes no arguments, got '{rest}'");
    }

    Ok(parsed)
}
