pub mod builtins;
pub mod path_resolver;
pub mod pipeline;

use crate::ast::{Command, Pipeline};
use crate::config::Config;
use crate::environment::Environment;
use crate::error::ExecError;

use builtins::BuiltinManager;

/// `Ok` carries the pipeline's 0-255 status; `Err` is reserved for fatal
/// resource failures the interpreter cannot recover from.
pub type ExecStatus = Result<i32, ExecError>;

/// Execute one pipeline: builtins are inspected first and run in-process
/// (they never fork); everything else is spawned via [`pipeline::run`].
///
/// Only a single-stage pipeline may name a builtin. A builtin at the head
/// of a longer pipeline has no meaningful stdout to wire, so it is rejected
/// rather than silently half-executed.
pub fn execute(pipeline: &Pipeline, env: &mut Environment, config: &Config) -> ExecStatus {
    let manager = BuiltinManager::new();
    let first = pipeline.first();
    if manager.is_builtin(first.name()) {
        if pipeline.commands.len() > 1 {
            eprintln!("ish: {}: builtins cannot be part of a pipeline", first.name());
            return Ok(1);
        }
        return manager.execute(first.name(), first.args(), env, config);
    }
    pipeline::run(&pipeline.commands, env, config)
}

/// Run one command (builtin or external) outside any pipe wiring. Used for
/// the condition and the branches of `if`.
pub(crate) fn run_single(tokens: &[String], env: &mut Environment, config: &Config) -> ExecStatus {
    let manager = BuiltinManager::new();
    if manager.is_builtin(&tokens[0]) {
        return manager.execute(&tokens[0], &tokens[1..], env, config);
    }
    let command = Command::new(tokens.to_vec());
    pipeline::run(std::slice::from_ref(&command), env, config)
}
