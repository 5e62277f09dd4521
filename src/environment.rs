use std::collections::HashMap;

/// The interpreter's view of the process environment.
///
/// Seeded from the OS environment at startup; builtins and the REPL mutate
/// it directly (`?`, `PWD`, `OLDPWD`, `setenv`). The whole map is handed to
/// every spawned stage, so externals see exactly what the interpreter sees.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        let mut env = Environment {
            vars: HashMap::new(),
        };
        for (k, v) in std::env::vars() {
            env.vars.insert(k, v);
        }
        env
    }

    /// An empty environment, used by tests that must not depend on the
    /// OS environment of the test runner.
    pub fn empty() -> Self {
        Environment {
            vars: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|v| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.vars.iter()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}
