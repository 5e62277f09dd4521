use crate::config::Config;
use crate::environment::Environment;
use crate::executor;
use crate::expander;
use crate::lexer::Lexer;
use crate::prompt::ShellPrompt;

/// What one input line did to the session.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Nothing was executed (blank or whitespace-only input); `?` is
    /// untouched.
    Skipped,
    /// A pipeline (or builtin) ran and produced this status.
    Executed(i32),
    /// A fatal resource failure; the interpreter must stop.
    Fatal,
}

/// The read-eval loop: prompt, read, tokenize, expand, execute, record `?`.
pub struct Repl {
    config: Config,
    env: Environment,
    prompt: ShellPrompt,
}

impl Repl {
    pub fn new(config: Config, env: Environment) -> Self {
        let prompt = ShellPrompt::new(config.quiet);
        Repl {
            config,
            env,
            prompt,
        }
    }

    /// Run until end of input. Returns the interpreter's exit status: 0 on
    /// clean EOF, 1 after a fatal executor error. (`exit` and quick-exit
    /// under `-x` terminate the process inside the executor and never
    /// return here.)
    pub fn run(&mut self) -> i32 {
        loop {
            let line = match self.prompt.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return 0,
                Err(e) => {
                    eprintln!("ish: {}", e);
                    return 1;
                }
            };
            match self.eval_line(&line) {
                LineOutcome::Skipped => {}
                LineOutcome::Executed(status) => {
                    self.env.set("?", &status.to_string());
                }
                LineOutcome::Fatal => return 1,
            }
        }
    }

    /// Process one line of input. Tokenize/format and builtin errors are
    /// reported to stderr and become status 1; only resource-acquisition
    /// failures are fatal.
    pub fn eval_line(&mut self, line: &str) -> LineOutcome {
        if line.trim().is_empty() {
            return LineOutcome::Skipped;
        }

        let pipeline = match Lexer::tokenize(line, self.config.max_stages) {
            Ok(Some(pipeline)) => pipeline,
            Ok(None) => return LineOutcome::Skipped,
            Err(e) => {
                eprintln!("ish: {}", e);
                return LineOutcome::Executed(1);
            }
        };

        let pipeline = match expander::expand(&pipeline, &self.env) {
            Ok(pipeline) => pipeline,
            Err(e) => {
                eprintln!("ish: {}", e);
                return LineOutcome::Executed(1);
            }
        };

        match executor::execute(&pipeline, &mut self.env, &self.config) {
            Ok(status) => LineOutcome::Executed(status),
            Err(e) => {
                eprintln!("ish: {}", e);
                LineOutcome::Fatal
            }
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl() -> Repl {
        Repl::new(Config::default(), Environment::new())
    }

    fn eval_and_record(repl: &mut Repl, line: &str) -> LineOutcome {
        // Mirror what `run` does with the outcome.
        let outcome = repl.eval_line(line);
        if let LineOutcome::Executed(status) = outcome {
            repl.env.set("?", &status.to_string());
        }
        outcome
    }

    #[test]
    fn test_whitespace_only_line_is_skipped_and_leaves_status_alone() {
        let mut repl = repl();
        repl.env.set("?", "41");
        assert_eq!(repl.eval_line(""), LineOutcome::Skipped);
        assert_eq!(repl.eval_line("   "), LineOutcome::Skipped);
        assert_eq!(repl.eval_line("\t \t"), LineOutcome::Skipped);
        assert_eq!(repl.env.get("?"), Some("41"));
    }

    #[test]
    fn test_status_is_recorded_in_question_mark() {
        let mut repl = repl();
        eval_and_record(&mut repl, "false");
        assert_eq!(repl.env.get("?"), Some("1"));
        eval_and_record(&mut repl, "true");
        assert_eq!(repl.env.get("?"), Some("0"));
    }

    #[test]
    fn test_format_error_becomes_status_one() {
        let mut repl = repl();
        assert_eq!(repl.eval_line("a |"), LineOutcome::Executed(1));
        assert_eq!(repl.eval_line("if oops"), LineOutcome::Executed(1));
    }

    #[test]
    fn test_builtin_line_mutates_environment() {
        let mut repl = repl();
        assert_eq!(
            repl.eval_line("setenv REPL_TEST done"),
            LineOutcome::Executed(0)
        );
        assert_eq!(repl.env().get("REPL_TEST"), Some("done"));
    }

    #[test]
    fn test_expansion_uses_session_state() {
        let mut repl = repl();
        repl.eval_line("setenv GREETING hello");
        // ${GREETING} expands before execution, so `test` compares the value.
        assert_eq!(
            repl.eval_line("test ${GREETING} = hello"),
            LineOutcome::Executed(0)
        );
    }

    #[test]
    fn test_if_then_setenv_then_expand_round_trip() {
        let mut repl = repl();
        repl.eval_line("if true then { setenv X yes } else { setenv X no }");
        assert_eq!(repl.eval_line("test ${X} = yes"), LineOutcome::Executed(0));
    }

    #[test]
    fn test_vanished_command_is_an_error() {
        let mut repl = repl();
        assert_eq!(
            repl.eval_line("${NO_SUCH_VARIABLE_SET}"),
            LineOutcome::Executed(1)
        );
    }
}
