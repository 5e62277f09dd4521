use std::fmt;
use std::io;

pub const IF_USAGE: &str = "Usage: if CONDITION then { CONSEQUENT } else { ALTERNATIVE }";

/// Errors produced while splitting an input line into a pipeline.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LexError {
    EmptyStage,
    TooManyStages(usize, usize),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::EmptyStage => write!(f, "empty pipeline stage"),
            LexError::TooManyStages(got, max) => {
                write!(f, "pipeline has {} stages (limit is {})", got, max)
            }
        }
    }
}

/// Format errors in the `if COND then { .. } else { .. }` form.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    MissingThen,
    MissingElse,
    ExpectedOpenBrace(&'static str),
    UnclosedBrace(&'static str),
    EmptySection(&'static str),
    TrailingTokens,
    NestedIf,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingThen => write!(f, "if: missing `then`"),
            ParseError::MissingElse => write!(f, "if: missing `else`"),
            ParseError::ExpectedOpenBrace(section) => {
                write!(f, "if: expected `{{` to open the {}", section)
            }
            ParseError::UnclosedBrace(section) => {
                write!(f, "if: missing `}}` to close the {}", section)
            }
            ParseError::EmptySection(section) => write!(f, "if: empty {}", section),
            ParseError::TrailingTokens => write!(f, "if: tokens after the closing `}}`"),
            ParseError::NestedIf => write!(f, "if: nested `if` is not supported"),
        }
    }
}

/// Errors produced by variable expansion.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ExpandError {
    EmptyCommand(String),
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::EmptyCommand(original) => {
                write!(f, "command vanished after expansion: {}", original)
            }
        }
    }
}

/// Fatal executor failures. Anything recoverable (command not found,
/// permission denied, builtin misuse) is reported on stderr and folded into
/// the status code instead; an `ExecError` means the interpreter cannot
/// safely continue with a partially wired pipeline.
#[derive(Debug)]
pub enum ExecError {
    Pipe(io::Error),
    Spawn(io::Error),
    Wait(io::Error),
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::Pipe(e) => write!(f, "failed to create pipe: {}", e),
            ExecError::Spawn(e) => write!(f, "failed to spawn process: {}", e),
            ExecError::Wait(e) => write!(f, "failed to wait for process: {}", e),
        }
    }
}

impl std::error::Error for ExecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExecError::Pipe(e) | ExecError::Spawn(e) | ExecError::Wait(e) => Some(e),
        }
    }
}
