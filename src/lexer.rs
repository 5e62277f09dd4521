use crate::ast::{Command, Pipeline};
use crate::error::LexError;

pub struct Lexer;

impl Lexer {
    /// Split one input line into a pipeline of commands.
    ///
    /// Single scan with two quote modes. A quote character toggles its own
    /// mode only while the other mode is inactive and never reaches the
    /// output, so adjacent quoted segments concatenate into one token. An
    /// unquoted space ends the current token, an unquoted `|` ends the
    /// current command. Every other character belongs to the token.
    ///
    /// Returns `Ok(None)` for a line with no tokens at all (blank input is a
    /// no-op, not an error). An unterminated quote is implicitly closed at
    /// end of line.
    pub fn tokenize(line: &str, max_stages: usize) -> Result<Option<Pipeline>, LexError> {
        let mut commands: Vec<Command> = Vec::new();
        let mut tokens: Vec<String> = Vec::new();
        let mut buf = String::new();
        let mut started = false;
        let mut in_single = false;
        let mut in_double = false;

        for ch in line.chars() {
            match ch {
                '\'' if !in_double => {
                    in_single = !in_single;
                    started = true;
                }
                '"' if !in_single => {
                    in_double = !in_double;
                    started = true;
                }
                ' ' if !in_single && !in_double => {
                    if started {
                        tokens.push(std::mem::take(&mut buf));
                        started = false;
                    }
                }
                '|' if !in_single && !in_double => {
                    if started {
                        tokens.push(std::mem::take(&mut buf));
                        started = false;
                    }
                    if tokens.is_empty() {
                        return Err(LexError::EmptyStage);
                    }
                    commands.push(Command::new(std::mem::take(&mut tokens)));
                }
                _ => {
                    buf.push(ch);
                    started = true;
                }
            }
        }

        if started {
            tokens.push(buf);
        }
        if tokens.is_empty() {
            if commands.is_empty() {
                return Ok(None);
            }
            // `cmd |` with nothing after the pipe
            return Err(LexError::EmptyStage);
        }
        commands.push(Command::new(tokens));

        if commands.len() > max_stages {
            return Err(LexError::TooManyStages(commands.len(), max_stages));
        }
        Ok(Some(Pipeline::new(commands)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 64;

    fn pipeline(line: &str) -> Pipeline {
        Lexer::tokenize(line, MAX).unwrap().unwrap()
    }

    fn single(line: &str) -> Vec<String> {
        let p = pipeline(line);
        assert_eq!(p.commands.len(), 1);
        p.commands[0].tokens().to_vec()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(single("echo hello world"), ["echo", "hello", "world"]);
    }

    #[test]
    fn test_leading_and_repeated_spaces() {
        assert_eq!(single("   echo   a  b "), ["echo", "a", "b"]);
    }

    #[test]
    fn test_double_and_single_quotes() {
        assert_eq!(single(r#"echo "a b" 'c d'"#), ["echo", "a b", "c d"]);
    }

    #[test]
    fn test_adjacent_quoted_segments_concatenate() {
        assert_eq!(single(r#""foo""bar""#), ["foobar"]);
        assert_eq!(single(r#"pre"mid"'post'"#), ["premidpost"]);
    }

    #[test]
    fn test_quote_of_other_kind_is_literal() {
        assert_eq!(single(r#"echo "it's""#), ["echo", "it's"]);
        assert_eq!(single(r#"echo 'say "hi"'"#), ["echo", r#"say "hi""#]);
    }

    #[test]
    fn test_empty_quoted_token() {
        assert_eq!(single(r#"echo """#), ["echo", ""]);
    }

    #[test]
    fn test_unterminated_quote_is_implicitly_closed() {
        // Deliberate leniency carried from the source: no error.
        assert_eq!(single(r#"echo "a b"#), ["echo", "a b"]);
        assert_eq!(single("echo 'x"), ["echo", "x"]);
    }

    #[test]
    fn test_pipe_splits_commands() {
        let p = pipeline("printf hello | tr h H");
        assert_eq!(p.commands.len(), 2);
        assert_eq!(p.commands[0].tokens(), ["printf", "hello"]);
        assert_eq!(p.commands[1].tokens(), ["tr", "h", "H"]);
    }

    #[test]
    fn test_pipe_without_spaces() {
        let p = pipeline("a|b|c");
        assert_eq!(p.commands.len(), 3);
        assert_eq!(p.commands[1].tokens(), ["b"]);
    }

    #[test]
    fn test_quoted_pipe_is_literal() {
        assert_eq!(single(r#"echo "a|b""#), ["echo", "a|b"]);
    }

    #[test]
    fn test_blank_line_is_noop() {
        assert_eq!(Lexer::tokenize("", MAX), Ok(None));
        assert_eq!(Lexer::tokenize("     ", MAX), Ok(None));
    }

    #[test]
    fn test_empty_stage_is_an_error() {
        assert_eq!(Lexer::tokenize("| a", MAX), Err(LexError::EmptyStage));
        assert_eq!(Lexer::tokenize("a |", MAX), Err(LexError::EmptyStage));
        assert_eq!(Lexer::tokenize("a || b", MAX), Err(LexError::EmptyStage));
    }

    #[test]
    fn test_stage_limit() {
        let line = vec!["x"; 5].join(" | ");
        assert_eq!(Lexer::tokenize(&line, 4), Err(LexError::TooManyStages(5, 4)));
        assert!(Lexer::tokenize(&line, 5).unwrap().is_some());
    }

    #[test]
    fn test_rejoined_unquoted_line_retokenizes_identically() {
        let original = pipeline("printf hello | tr h H");
        let rejoined: Vec<String> = original
            .commands
            .iter()
            .map(|c| c.tokens().join(" "))
            .collect();
        let reparsed = pipeline(&rejoined.join(" | "));
        assert_eq!(original, reparsed);
    }
}
