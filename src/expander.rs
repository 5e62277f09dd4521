use crate::ast::{Command, Pipeline};
use crate::environment::Environment;
use crate::error::ExpandError;

/// Rewrite every token of the exact form `${NAME}` to the value of `NAME`.
///
/// Runs once, between tokenization and execution. An unset variable removes
/// the token entirely. Expansion is not recursive: the substituted value is
/// used as-is, never re-scanned. Anything that is not exactly `${NAME}`
/// (prefixes, suffixes, bare `$NAME`) passes through untouched.
pub fn expand(pipeline: &Pipeline, env: &Environment) -> Result<Pipeline, ExpandError> {
    let mut commands = Vec::with_capacity(pipeline.commands.len());
    for cmd in &pipeline.commands {
        let tokens: Vec<String> = cmd
            .tokens()
            .iter()
            .filter_map(|token| match variable_name(token) {
                Some(name) => env.get(name).map(|v| v.to_string()),
                None => Some(token.clone()),
            })
            .collect();
        if tokens.is_empty() {
            return Err(ExpandError::EmptyCommand(cmd.tokens().join(" ")));
        }
        commands.push(Command::new(tokens));
    }
    Ok(Pipeline::new(commands))
}

/// `${NAME}` => `NAME`; anything else is not a variable reference.
fn variable_name(token: &str) -> Option<&str> {
    token.strip_prefix("${")?.strip_suffix('}')
}
