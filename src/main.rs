use argh::FromArgs;

use ish::config::Config;
use ish::environment::Environment;
use ish::repl::Repl;

#[derive(FromArgs, Debug)]
/// A shell-ish thing for running commands, compatible with nothing.
struct IshArgs {
    /// suppress the prompt
    #[argh(switch, short = 'q')]
    quiet: bool,

    /// exit immediately when any command fails
    #[argh(switch, short = 'x')]
    quick_exit: bool,

    /// print version information and exit
    #[argh(switch, short = 'v')]
    version: bool,

    /// positional startup arguments, exposed as ${1}..${N}
    #[argh(positional, greedy)]
    args: Vec<String>,
}

/// Rewrite the flags argh cannot take as-is: `-h` becomes `--help`, and a
/// cluster of short flags (`-qx`) is split into separate switches.
fn normalize_args(args: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    for arg in args {
        if arg == "-h" {
            out.push("--help".to_string());
        } else if arg.len() > 2
            && arg.starts_with('-')
            && !arg.starts_with("--")
            && arg.chars().skip(1).all(|c| c.is_ascii_alphabetic())
        {
            for c in arg.chars().skip(1) {
                if c == 'h' {
                    out.push("--help".to_string());
                } else {
                    out.push(format!("-{}", c));
                }
            }
        } else {
            out.push(arg.clone());
        }
    }
    out
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let invocation = argv.first().map(|s| s.as_str()).unwrap_or("ish");
    let normalized = normalize_args(argv.get(1..).unwrap_or(&[]));
    let rest: Vec<&str> = normalized.iter().map(|s| s.as_str()).collect();

    // Help and usage errors both exit 1, so argh is driven by hand instead
    // of through `from_env`.
    let flags = match IshArgs::from_args(&[invocation], &rest) {
        Ok(flags) => flags,
        Err(early_exit) => {
            if early_exit.status.is_ok() {
                println!("{}", early_exit.output);
            } else {
                eprintln!("{}", early_exit.output);
            }
            std::process::exit(1);
        }
    };
    if flags.version {
        println!("ish v{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(1);
    }

    // Not knowing where we are is a fatal startup error.
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("ish: cannot determine working directory: {}", e);
            std::process::exit(1);
        }
    };

    let mut env = Environment::new();
    env.set("SHELL", invocation);
    env.set("PWD", &cwd.to_string_lossy());
    env.set("0", invocation);
    for (i, arg) in flags.args.iter().enumerate() {
        env.set(&(i + 1).to_string(), arg);
    }

    let config = Config {
        quiet: flags.quiet,
        quick_exit: flags.quick_exit,
        ..Config::default()
    };

    let mut repl = Repl::new(config, env);
    std::process::exit(repl.run());
}
