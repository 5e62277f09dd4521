use crate::error::ParseError;

/// The three sections of `if CONDITION then { CONSEQUENT } else { ALTERNATIVE }`,
/// split out of the token stream. Each section is itself a single command
/// (name plus arguments); pipes and nested `if` inside a section are
/// unsupported and rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStatement {
    pub condition: Vec<String>,
    pub consequent: Vec<String>,
    pub alternative: Vec<String>,
}

/// Parse the tokens following the leading `if` keyword.
///
/// One left-to-right pass: everything up to the literal `then` is the
/// condition, `then` must be followed by `{`, the matching standalone `}`
/// closes the consequent, then `else` and a second braced section, and
/// nothing may follow the final `}`.
pub fn parse_if(args: &[String]) -> Result<IfStatement, ParseError> {
    let mut iter = args.iter();

    let mut condition = Vec::new();
    loop {
        match iter.next() {
            Some(t) if t == "then" => break,
            Some(t) => condition.push(t.clone()),
            None => return Err(ParseError::MissingThen),
        }
    }
    if condition.is_empty() {
        return Err(ParseError::EmptySection("condition"));
    }
    if condition[0] == "if" {
        return Err(ParseError::NestedIf);
    }

    expect_open_brace(iter.next(), "consequent")?;
    let consequent = braced_section(&mut iter, "consequent")?;

    match iter.next() {
        Some(t) if t == "else" => {}
        _ => return Err(ParseError::MissingElse),
    }

    expect_open_brace(iter.next(), "alternative")?;
    let alternative = braced_section(&mut iter, "alternative")?;

    if iter.next().is_some() {
        return Err(ParseError::TrailingTokens);
    }

    Ok(IfStatement {
        condition,
        consequent,
        alternative,
    })
}

fn expect_open_brace(token: Option<&String>, section: &'static str) -> Result<(), ParseError> {
    match token {
        Some(t) if t == "{" => Ok(()),
        _ => Err(ParseError::ExpectedOpenBrace(section)),
    }
}

fn braced_section<'a, I>(iter: &mut I, section: &'static str) -> Result<Vec<String>, ParseError>
where
    I: Iterator<Item = &'a String>,
{
    let mut tokens = Vec::new();
    loop {
        match iter.next() {
            Some(t) if t == "}" => break,
            Some(t) => tokens.push(t.clone()),
            None => return Err(ParseError::UnclosedBrace(section)),
        }
    }
    if tokens.is_empty() {
        return Err(ParseError::EmptySection(section));
    }
    // Checked here, as the section completes: a nested `if` swallows the
    // braces that would otherwise close the outer statement, so waiting
    // until the end would misreport it as a trailing-token error.
    if tokens[0] == "if" {
        return Err(ParseError::NestedIf);
    }
    Ok(tokens)
}
