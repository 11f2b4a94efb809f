/// Error when declaring a custom verb for a [`Context`](crate::Context)
///
/// These are only produced at construction time. Once a
/// [`ContextValue`](crate::ContextValue) exists, rendering it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ContextError {
    /// The verb is one of the built-in verbs (`bar`, `percent`, `rate`, `eta`)
    #[display(":{_0} is a reserved verb, please choose another name")]
    ReservedVerb(#[error(not(source))] String),
    /// The verb is empty, starts with `:` or is not an identifier
    #[display("malformed custom verb `{_0}`: {_1}")]
    MalformedVerb(#[error(not(source))] String, &'static str),
    /// The value cannot be displayed, e.g. a `NaN` float
    #[display("invalid value for custom verb: {_0}")]
    InvalidContextValue(#[error(not(source))] String),
}
