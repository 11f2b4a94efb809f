use crate::format::Builtin;
use crate::{ContextError, IntoStringish, Stringish};

/// Declare a substitution for a custom verb.
///
/// The verb is declared without the `:` prefix, which is implied in the template.
///
/// ```rust
/// let stage = tickbar::ctx("stage", "build").unwrap();
/// assert_eq!(stage.verb(), "stage");
///
/// assert!(tickbar::ctx("bar", "x").is_err()); // reserved
/// assert!(tickbar::ctx(":stage", "x").is_err()); // `:` is implied
/// ```
#[inline(always)]
pub fn ctx<T: IntoStringish>(verb: &str, value: T) -> Result<ContextValue, ContextError> {
    ContextValue::new(verb, value)
}

/// A (verb, value) pair substituted into the template at render time
#[derive(Debug, Clone, PartialEq)]
pub struct ContextValue {
    verb: String,
    value: Stringish,
}

impl ContextValue {
    /// Validate the verb and convert the value. See [`ctx`]
    pub fn new<T: IntoStringish>(verb: &str, value: T) -> Result<Self, ContextError> {
        validate_verb(verb)?;
        Ok(Self {
            verb: verb.to_string(),
            value: value.into_stringish()?,
        })
    }
    /// The verb name, without `:`
    pub fn verb(&self) -> &str {
        &self.verb
    }
    /// The value substituted for the verb
    pub fn value(&self) -> &Stringish {
        &self.value
    }
}

fn validate_verb(verb: &str) -> Result<(), ContextError> {
    if verb.starts_with(':') {
        return Err(ContextError::MalformedVerb(
            verb.to_string(),
            "don't prefix the custom verb with `:`, it's implied",
        ));
    }
    if Builtin::from_name(verb).is_some() {
        return Err(ContextError::ReservedVerb(verb.to_string()));
    }
    let mut chars = verb.chars();
    match chars.next() {
        None => {
            return Err(ContextError::MalformedVerb(
                String::new(),
                "verb cannot be empty",
            ));
        }
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err(ContextError::MalformedVerb(
                verb.to_string(),
                "verb must start with a letter or `_`",
            ));
        }
        _ => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ContextError::MalformedVerb(
            verb.to_string(),
            "verb can only contain letters, digits and `_`",
        ));
    }
    Ok(())
}

/// Ordered set of custom verb bindings attached to an update.
///
/// When a verb is declared more than once, the first declaration wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context(Vec<ContextValue>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }
    /// Add a binding at the end
    pub fn push(&mut self, value: ContextValue) {
        self.0.push(value);
    }
    /// Builder-style [`push`](Self::push)
    pub fn with(mut self, value: ContextValue) -> Self {
        self.push(value);
        self
    }
    /// Look up the value bound to a verb
    pub fn get(&self, verb: &str) -> Option<&Stringish> {
        self.0.iter().find(|x| x.verb == verb).map(|x| &x.value)
    }
    /// Names of the custom verbs in this context, in declaration order
    pub fn custom_verbs(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|x| x.verb.as_str())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, ContextValue> {
        self.0.iter()
    }
}

impl From<Vec<ContextValue>> for Context {
    fn from(value: Vec<ContextValue>) -> Self {
        Self(value)
    }
}

impl FromIterator<ContextValue> for Context {
    fn from_iter<I: IntoIterator<Item = ContextValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Context {
    type Item = &'a ContextValue;
    type IntoIter = std::slice::Iter<'a, ContextValue>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_verbs() {
        for verb in ["bar", "percent", "rate", "eta"] {
            assert_eq!(
                ctx(verb, "x").unwrap_err(),
                ContextError::ReservedVerb(verb.to_string())
            );
        }
    }

    #[test]
    fn test_malformed_verbs() {
        for verb in [":stage", "", "2fast", "my stage", "stage-1"] {
            let err = ctx(verb, 1).unwrap_err();
            assert!(matches!(err, ContextError::MalformedVerb(..)), "{verb}: {err}");
        }
        // colon check comes first, even for reserved names
        assert!(matches!(
            ctx(":bar", 1).unwrap_err(),
            ContextError::MalformedVerb(..)
        ));
    }

    #[test]
    fn test_lookup_first_wins() {
        let context: Context = [
            ctx("stage", "build").unwrap(),
            ctx("count", 3).unwrap(),
            ctx("stage", "test").unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(context.get("stage").unwrap().render(), "build");
        assert_eq!(context.get("count").unwrap().render(), "3");
        assert!(context.get("missing").is_none());
        let verbs: Vec<_> = context.custom_verbs().collect();
        assert_eq!(verbs, ["stage", "count", "stage"]);
    }
}
