//! Tokenizing of route templates into literal text and `[name]` parameters
//!
//! Every other template operation (parameter extraction, matcher building,
//! interpolation) walks the same token stream, so what the builder requires
//! is exactly what the validator matches.
use regex::Regex;

/// A piece of a route template
///
/// # Examples
///
/// ```
/// use typed_routes::template::token::{tokenize, Token};
///
/// let tokens: Vec<Token> = tokenize("/user/[id]").collect();
/// assert_eq!(tokens, vec![Token::Literal("/user/"), Token::Param("id")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text outside brackets, copied verbatim
    Literal(&'a str),
    /// Name between a `[` and the next `]`
    Param(&'a str),
}

/// Lazy iterator over the tokens of a template
///
/// Borrows from the input; no allocation. A `[` with no closing `]`, and an
/// empty `[]`, are yielded as literal text.
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find('[') {
            Some(0) => match self.rest[1..].find(']') {
                Some(0) => {
                    let (literal, rest) = self.rest.split_at(2);
                    self.rest = rest;
                    Some(Token::Literal(literal))
                }
                Some(end) => {
                    let name = &self.rest[1..=end];
                    self.rest = &self.rest[end + 2..];
                    Some(Token::Param(name))
                }
                None => Some(Token::Literal(std::mem::take(&mut self.rest))),
            },
            Some(start) => {
                let (literal, rest) = self.rest.split_at(start);
                self.rest = rest;
                Some(Token::Literal(literal))
            }
            None => Some(Token::Literal(std::mem::take(&mut self.rest))),
        }
    }
}

/// Splits a template into tokens, left to right
pub fn tokenize(template: &str) -> Tokens<'_> {
    Tokens { rest: template }
}

/// Extracts parameter names in order of appearance
///
/// Total over any input: a string with no bracket pair yields an empty list.
/// Duplicates are kept; rejecting them is up to the caller.
///
/// # Examples
///
/// ```
/// use typed_routes::extract_parameters;
///
/// assert!(extract_parameters("/").is_empty());
/// assert_eq!(extract_parameters("/user/[id]/posts/[postId]"), vec!["id", "postId"]);
/// ```
pub fn extract_parameters(template: &str) -> Vec<&str> {
    tokenize(template)
        .filter_map(|token| match token {
            Token::Param(name) => Some(name),
            Token::Literal(_) => None,
        })
        .collect()
}

/// True iff the template has at least one parameter
pub fn is_parametric(template: &str) -> bool {
    tokenize(template).any(|token| matches!(token, Token::Param(_)))
}

/// Regex source for a template: parameters become `[^/]+`, literals are escaped,
/// anchored at both ends.
pub fn matcher_pattern(template: &str) -> String {
    let mut pattern = String::with_capacity(template.len() + 2);
    pattern.push('^');
    for token in tokenize(template) {
        match token {
            Token::Literal(text) => pattern.push_str(&regex::escape(text)),
            Token::Param(_) => pattern.push_str("[^/]+"),
        }
    }
    pattern.push('$');
    pattern
}

/// Compiles the full-string matcher for a template. Used for validation only.
pub fn to_matcher(template: &str) -> Result<Regex, regex::Error> {
    Regex::new(&matcher_pattern(template))
}
