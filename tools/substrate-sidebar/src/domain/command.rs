//! Shell command parsing.

use thiserror::Error;

/// One shell gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Status,
    Help,
    Quit,
    /// Answer the add dialog and click `Add node`.
    Add { name: String, endpoint: String },
    /// Answer the edit dialog and click `Edit node` on `node`.
    Edit {
        node: String,
        name: String,
        endpoint: String,
    },
    /// Click a context menu label on a node.
    Click { node: String, label: String },
    /// Click a tab menu label.
    Tab { label: String },
    /// Show the context menu of `node`, or the tab menu without one.
    Menu { node: Option<String> },
    /// Press a sidebar header button.
    Panel { label: String },
    /// Collapse or expand a tab.
    Toggle { id: u32 },
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unterminated quote")]
    UnterminatedQuote,

    #[error("Invalid tab id: {0}")]
    InvalidId(String),
}

impl Command {
    /// Parse a line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let tokens = tokenize(line)?;
        let (verb, args) = match tokens.split_first() {
            Some((verb, args)) => (verb.as_str(), args),
            None => return Ok(None),
        };

        let command = match verb {
            "list" | "ls" => Self::List,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "add" => match args {
                [name, endpoint] => Self::Add {
                    name: name.clone(),
                    endpoint: endpoint.clone(),
                },
                _ => return Err(CommandError::Usage("add <name> <endpoint>")),
            },
            "edit" => match args {
                [node, name, endpoint] => Self::Edit {
                    node: node.clone(),
                    name: name.clone(),
                    endpoint: endpoint.clone(),
                },
                _ => return Err(CommandError::Usage("edit <node> <new-name> <new-endpoint>")),
            },
            "click" => match args {
                [node, label @ ..] if !label.is_empty() => Self::Click {
                    node: node.clone(),
                    label: label.join(" "),
                },
                _ => return Err(CommandError::Usage("click <node> <label...>")),
            },
            "tab" => {
                if args.is_empty() {
                    return Err(CommandError::Usage("tab <label...>"));
                }
                Self::Tab {
                    label: args.join(" "),
                }
            }
            "menu" => match args {
                [] => Self::Menu { node: None },
                [node] => Self::Menu {
                    node: Some(node.clone()),
                },
                _ => return Err(CommandError::Usage("menu [node]")),
            },
            "panel" => {
                if args.is_empty() {
                    return Err(CommandError::Usage("panel <label>"));
                }
                Self::Panel {
                    label: args.join(" "),
                }
            }
            "toggle" => match args {
                [id] => Self::Toggle {
                    id: id
                        .parse()
                        .map_err(|_| CommandError::InvalidId(id.clone()))?,
                },
                _ => return Err(CommandError::Usage("toggle <id>")),
            },
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Split on whitespace, keeping `"double quoted"` runs together.
fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(CommandError::UnterminatedQuote);
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    Ok(tokens)
}
