use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{Builtin, Token};

static VERB_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    // constant pattern, checked by tests
    Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("invalid verb marker pattern")
});

/// Compile a template into tokens.
///
/// Identifiers after `:` are matched against the built-in verbs first,
/// then against `custom_verbs`. Markers that match neither are kept
/// as literal text. Adjacent literal text is merged into one token.
///
/// ```rust
/// use tickbar::format::{tokenize, Builtin, Token};
///
/// let tokens = tokenize(":stage :bar :nope", ["stage"]);
/// assert_eq!(tokens, vec![
///     Token::Custom("stage".to_string()),
///     Token::Literal(" ".to_string()),
///     Token::Verb(Builtin::Bar),
///     Token::Literal(" :nope".to_string()),
/// ]);
/// ```
pub fn tokenize<'a, I>(template: &str, custom_verbs: I) -> Vec<Token>
where
    I: IntoIterator<Item = &'a str>,
{
    let custom_verbs: BTreeSet<&str> = custom_verbs.into_iter().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut last = 0;
    for captures in VERB_MARKER.captures_iter(template) {
        let (Some(marker), Some(ident)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        literal.push_str(&template[last..marker.start()]);
        last = marker.end();
        let token = match Builtin::from_name(ident.as_str()) {
            Some(verb) => Token::Verb(verb),
            None if custom_verbs.contains(ident.as_str()) => {
                Token::Custom(ident.as_str().to_string())
            }
            None => {
                literal.push_str(marker.as_str());
                continue;
            }
        };
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(token);
    }
    literal.push_str(&template[last..]);
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}
