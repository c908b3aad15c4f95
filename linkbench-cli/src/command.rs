//! Textual command set of the interactive shell.
//!
//! One command per line, arguments separated by whitespace. The syntax here
//! is a replaceable skin over the list's operations; the shell owns no list
//! semantics of its own.

use std::num::ParseIntError;

use thiserror::Error;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Clear the list and fill it with `count` random values in 0..100.
    Random { count: usize },
    /// Append each value in order.
    Fill { values: Vec<i64> },
    /// Insert `value` at `pos`.
    Insert { pos: usize, value: i64 },
    /// Read the value at `pos`.
    Read { pos: usize },
    /// Print all values, head to tail.
    ReadAll,
    /// Print all values, tail to head.
    ReadReverse,
    /// Report the position of the first occurrence of `value`.
    Find { value: i64 },
    /// Replace the value at `pos`.
    Update { pos: usize, value: i64 },
    /// Delete the value at `pos`.
    Delete { pos: usize },
    /// Delete the first occurrence of `value`.
    FindDelete { value: i64 },
    /// Remove all values.
    Clear,
    /// Report length plus head and tail values.
    Len,
    /// Latency percentile report over `ops` timed operations.
    Bench { ops: usize },
    /// Print the command list.
    Help,
    /// Print what this program is.
    About,
    /// Quit the shell.
    Exit,
}

/// Failure to turn an input line into a [`Command`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The first token matched no command.
    #[error("unknown command `{0}`; type `help` for the command list")]
    Unknown(String),
    /// Wrong argument count for a known command.
    #[error("usage: {usage}")]
    Usage {
        /// The usage line to show.
        usage: &'static str,
    },
    /// An argument that should have been a number was not.
    #[error("invalid number `{input}`: {source}")]
    Number {
        /// The offending token.
        input: String,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },
}

impl Command {
    /// Parses one non-blank input line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let head = tokens.next().unwrap_or_default();

        let command = match head {
            "random" => Command::Random {
                count: arg(&mut tokens, "random <n>")?,
            },
            "fill" => {
                let values = tokens
                    .map(|token| number(token))
                    .collect::<Result<Vec<i64>, _>>()?;
                if values.is_empty() {
                    return Err(ParseError::Usage {
                        usage: "fill <value>...",
                    });
                }
                return Ok(Command::Fill { values });
            }
            "insert" => Command::Insert {
                pos: arg(&mut tokens, "insert <pos> <value>")?,
                value: arg(&mut tokens, "insert <pos> <value>")?,
            },
            "read" => Command::Read {
                pos: arg(&mut tokens, "read <pos>")?,
            },
            "read-all" => Command::ReadAll,
            "read-reverse" => Command::ReadReverse,
            "find" => Command::Find {
                value: arg(&mut tokens, "find <value>")?,
            },
            "update" => Command::Update {
                pos: arg(&mut tokens, "update <pos> <value>")?,
                value: arg(&mut tokens, "update <pos> <value>")?,
            },
            "delete" => Command::Delete {
                pos: arg(&mut tokens, "delete <pos>")?,
            },
            "find-delete" => Command::FindDelete {
                value: arg(&mut tokens, "find-delete <value>")?,
            },
            "clear" => Command::Clear,
            "len" => Command::Len,
            "bench" => Command::Bench {
                ops: arg(&mut tokens, "bench <n>")?,
            },
            "help" => Command::Help,
            "about" => Command::About,
            "exit" => Command::Exit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        // Trailing junk is an argument-count error, not silently ignored
        if tokens.next().is_some() {
            return Err(ParseError::Usage {
                usage: usage_of(head),
            });
        }

        Ok(command)
    }
}

/// Pulls and parses the next numeric argument.
fn arg<'a, T, I>(tokens: &mut I, usage: &'static str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = ParseIntError>,
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(ParseError::Usage { usage })?;
    number(token)
}

fn number<T>(token: &str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| ParseError::Number {
        input: token.to_string(),
        source,
    })
}

fn usage_of(head: &str) -> &'static str {
    match head {
        "random" => "random <n>",
        "insert" => "insert <pos> <value>",
        "read" => "read <pos>",
        "read-all" => "read-all",
        "read-reverse" => "read-reverse",
        "find" => "find <value>",
        "update" => "update <pos> <value>",
        "delete" => "delete <pos>",
        "find-delete" => "find-delete <value>",
        "clear" => "clear",
        "len" => "len",
        "bench" => "bench <n>",
        "help" => "help",
        "about" => "about",
        "exit" => "exit",
        _ => "help",
    }
}

/// Command list printed by `help`.
pub const HELP: &str = "\
Commands:
  random <n>           clear, then fill with n random values in 0..100
  fill <value>...      append each value
  insert <pos> <value> insert value at position
  read <pos>           read value at position
  read-all             print all values, head to tail
  read-reverse         print all values, tail to head
  find <value>         position of first matching value
  update <pos> <value> replace value at position
  delete <pos>         delete value at position
  find-delete <value>  delete first matching value
  clear                remove all values
  len                  length plus head and tail values
  bench <n>            latency percentile report over n operations
  help                 this list
  about                what this program is
  exit                 quit";

/// Intro printed at startup and by `about`.
pub const ABOUT: &str = "\
linkbench demonstrates and times CRUD operations on a doubly linked list.
Values are signed integers stored in an arena-backed list; every command
that touches the list reports its elapsed time. Type `help` for commands.";
