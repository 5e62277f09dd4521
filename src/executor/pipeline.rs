use std::io;
use std::os::fd::OwnedFd;
use std::os::unix::process::ExitStatusExt;
use std::process::{self, Child, ExitStatus, Stdio};

use nix::unistd;

use crate::ast::Command;
use crate::config::Config;
use crate::environment::Environment;
use crate::error::ExecError;

use super::ExecStatus;
use super::path_resolver::PathResolver;

/// Spawn the stages of a pipeline connected by anonymous pipes and reap
/// them all, returning the terminal stage's decoded status.
///
/// The first stage reads the interpreter's stdin, the last writes the
/// interpreter's stdout. Each pipe endpoint is an `OwnedFd` that is moved
/// into exactly one child's `Stdio`; spawning closes the parent's copy, so
/// no descriptor survives the stage that needed it and readers see EOF once
/// their writer exits.
pub fn run(commands: &[Command], env: &Environment, config: &Config) -> ExecStatus {
    // Resolve every program before wiring anything, so a bad name costs no
    // pipes and no half-started stages.
    let resolver = PathResolver;
    let mut programs = Vec::with_capacity(commands.len());
    for cmd in commands {
        match resolver.resolve(cmd.name(), env) {
            Some(path) => programs.push(path),
            None => {
                eprintln!("ish: command not found: {}", cmd.name());
                return finish(127, config);
            }
        }
    }

    let last = commands.len() - 1;
    let mut children: Vec<Child> = Vec::with_capacity(commands.len());
    let mut prev_read: Option<OwnedFd> = None;

    for (i, cmd) in commands.iter().enumerate() {
        let mut command = process::Command::new(&programs[i]);
        command.args(cmd.args());
        command.env_clear();
        command.envs(env.iter());

        if let Some(read) = prev_read.take() {
            command.stdin(Stdio::from(read));
        }
        if i != last {
            let (read, write) = unistd::pipe()
                .map_err(|e| ExecError::Pipe(io::Error::from_raw_os_error(e as i32)))?;
            command.stdout(Stdio::from(write));
            prev_read = Some(read);
        }

        match command.spawn() {
            Ok(child) => children.push(child),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
                ) =>
            {
                // The stage itself is unrunnable; everything already
                // spawned still gets reaped, and the dropped pipe ends let
                // upstream writers terminate.
                eprintln!("ish: {}: {}", cmd.name(), e);
                drop(prev_read);
                drop(command);
                reap(&mut children)?;
                let status = if e.kind() == io::ErrorKind::NotFound { 127 } else { 126 };
                return finish(status, config);
            }
            Err(e) => return Err(ExecError::Spawn(e)),
        }
    }

    // Reap every stage so none is left as a zombie; only the terminal
    // stage's termination becomes the pipeline's result.
    let mut result = 0;
    for (i, child) in children.iter_mut().enumerate() {
        let status = child.wait().map_err(ExecError::Wait)?;
        if i == last {
            result = decode_status(status);
        }
    }
    finish(result, config)
}

/// Quick-exit (`-x`) applies to every process result, including the
/// condition and branches of `if`: a nonzero status terminates the whole
/// interpreter instead of surfacing to the caller.
fn finish(result: i32, config: &Config) -> ExecStatus {
    if config.quick_exit && result != 0 {
        std::process::exit(result);
    }
    Ok(result)
}

fn reap(children: &mut [Child]) -> Result<(), ExecError> {
    for child in children {
        child.wait().map_err(ExecError::Wait)?;
    }
    Ok(())
}

/// Normal exit maps to the exit code; termination by signal S maps to
/// 128 + S.
pub fn decode_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        code
    } else if let Some(signal) = status.signal() {
        128 + signal
    } else {
        1
    }
}
