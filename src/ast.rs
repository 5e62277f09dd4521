/// One program invocation within a pipeline: the first token is the program
/// (or builtin) name, the rest are its arguments.
///
/// Invariant: a `Command` always holds at least one token. The lexer and the
/// expander both enforce this before a `Command` is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    pub fn new(tokens: Vec<String>) -> Self {
        debug_assert!(!tokens.is_empty());
        Command { tokens }
    }

    pub fn name(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// An ordered chain of commands, each stage's stdout feeding the next
/// stage's stdin. Never constructed with zero stages: a blank input line
/// produces no `Pipeline` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub commands: Vec<Command>,
}

impl Pipeline {
    pub fn new(commands: Vec<Command>) -> Self {
        debug_assert!(!commands.is_empty());
        Pipeline { commands }
    }

    pub fn first(&self) -> &Command {
        &self.commands[0]
    }
}
