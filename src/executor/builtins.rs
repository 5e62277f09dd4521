use std::collections::HashMap;

use crate::config::Config;
use crate::environment::Environment;
use crate::error::IF_USAGE;
use crate::parser;

use super::ExecStatus;

/// A command form handled inside the interpreter process. Builtins never
/// fork; their status becomes the pipeline's result directly, without going
/// through process-wait decoding.
pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    fn run(&self, args: &[String], env: &mut Environment, config: &Config) -> ExecStatus;
}

pub struct BuiltinManager {
    commands: HashMap<&'static str, Box<dyn BuiltinCommand>>,
}

impl BuiltinManager {
    pub fn new() -> Self {
        let mut mgr = BuiltinManager {
            commands: HashMap::new(),
        };
        mgr.register(Box::new(ExitCommand));
        mgr.register(Box::new(CdCommand));
        mgr.register(Box::new(SetenvCommand));
        mgr.register(Box::new(IfCommand));
        mgr
    }

    fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name(), cmd);
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn execute(
        &self,
        name: &str,
        args: &[String],
        env: &mut Environment,
        config: &Config,
    ) -> ExecStatus {
        match self.commands.get(name) {
            Some(cmd) => cmd.run(args, env, config),
            None => {
                eprintln!("ish: no such builtin: {}", name);
                Ok(1)
            }
        }
    }
}

impl Default for BuiltinManager {
    fn default() -> Self {
        BuiltinManager::new()
    }
}

/// `exit [N]`: terminate the interpreter process, status N (default 0).
struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn run(&self, args: &[String], _env: &mut Environment, _config: &Config) -> ExecStatus {
        let code = match args.first() {
            None => 0,
            Some(arg) => match arg.parse::<i32>() {
                Ok(n) => n,
                Err(_) => {
                    eprintln!("ish: exit: {}: numeric argument required", arg);
                    return Ok(1);
                }
            },
        };
        std::process::exit(code);
    }
}

/// `cd [PATH|-]`: change the interpreter's working directory. No argument
/// means `$HOME`, `-` means `$OLDPWD` (echoed afterwards, as POSIX shells
/// do). On success `OLDPWD` and `PWD` are updated; on failure nothing is.
struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn run(&self, args: &[String], env: &mut Environment, _config: &Config) -> ExecStatus {
        if args.len() > 1 {
            eprintln!("Usage: cd [PATH|-]");
            return Ok(1);
        }
        let (target, echo) = match args.first().map(|s| s.as_str()) {
            None => match env.get("HOME") {
                Some(home) => (home.to_string(), false),
                None => {
                    eprintln!("ish: cd: HOME not set");
                    return Ok(1);
                }
            },
            Some("-") => match env.get("OLDPWD") {
                Some(prev) => (prev.to_string(), true),
                None => {
                    eprintln!("ish: cd: OLDPWD not set");
                    return Ok(1);
                }
            },
            Some(path) => (path.to_string(), false),
        };

        let previous = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("ish: cd: {}", e);
                return Ok(1);
            }
        };
        if let Err(e) = std::env::set_current_dir(&target) {
            eprintln!("ish: cd: {}: {}", target, e);
            return Ok(1);
        }
        let now = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("ish: cd: {}", e);
                return Ok(1);
            }
        };

        env.set("OLDPWD", &previous.to_string_lossy());
        env.set("PWD", &now.to_string_lossy());
        if echo {
            println!("{}", now.display());
        }
        Ok(0)
    }
}

/// `setenv NAME VALUE`: set a variable, overwriting any existing value.
struct SetenvCommand;

impl BuiltinCommand for SetenvCommand {
    fn name(&self) -> &'static str {
        "setenv"
    }

    fn run(&self, args: &[String], env: &mut Environment, _config: &Config) -> ExecStatus {
        if args.len() != 2 {
            eprintln!("Usage: setenv NAME VALUE");
            return Ok(1);
        }
        env.set(&args[0], &args[1]);
        Ok(0)
    }
}

/// `if CONDITION then { CONSEQUENT } else { ALTERNATIVE }`: run the
/// condition as an ordinary single command; status 0 selects the
/// consequent, anything else the alternative. The chosen branch's status is
/// the statement's status.
struct IfCommand;

impl BuiltinCommand for IfCommand {
    fn name(&self) -> &'static str {
        "if"
    }

    fn run(&self, args: &[String], env: &mut Environment, config: &Config) -> ExecStatus {
        let stmt = match parser::parse_if(args) {
            Ok(stmt) => stmt,
            Err(e) => {
                eprintln!("ish: {}", e);
                eprintln!("{}", IF_USAGE);
                return Ok(1);
            }
        };
        let branch = if super::run_single(&stmt.condition, env, config)? == 0 {
            &stmt.consequent
        } else {
            &stmt.alternative
        };
        super::run_single(branch, env, config)
    }
}
