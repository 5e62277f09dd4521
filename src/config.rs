/// Interpreter settings, built once from the command line at startup and
/// passed by reference into the REPL and the executor.
#[derive(Debug, Clone)]
pub struct Config {
    /// Suppress the `$ ` prompt (`-q`).
    pub quiet: bool,
    /// Terminate the interpreter as soon as any pipeline fails (`-x`).
    pub quick_exit: bool,
    /// Upper bound on the number of stages in one pipeline.
    pub max_stages: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            quiet: false,
            quick_exit: false,
            max_stages: 64,
        }
    }
}
