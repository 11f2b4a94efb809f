use std::fmt::Write as _;

use crate::Context;
use crate::bar::State;

/// Built-in verbs. These names cannot be used for custom verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Bar,
    Percent,
    Rate,
    Eta,
}

impl Builtin {
    pub const ALL: [Self; 4] = [Self::Bar, Self::Percent, Self::Rate, Self::Eta];

    /// Name of the verb, without `:`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Percent => "percent",
            Self::Rate => "rate",
            Self::Eta => "eta",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|x| x.name() == name)
    }
}

/// One compiled piece of a format template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Text printed as-is
    Literal(String),
    /// A built-in verb like `:bar`
    Verb(Builtin),
    /// A custom verb, resolved against the context at render time
    Custom(String),
}

impl Token {
    /// Render the token for display
    pub(crate) fn render(&self, state: &State, context: &Context, out: &mut String) {
        match self {
            Self::Literal(text) => out.push_str(text),
            Self::Verb(Builtin::Bar) => state.write_bar(out),
            Self::Verb(Builtin::Percent) => state.write_percent(out),
            Self::Verb(Builtin::Rate) => state.write_rate(out),
            Self::Verb(Builtin::Eta) => state.write_eta(out),
            Self::Custom(name) => match context.get(name) {
                Some(value) => out.push_str(&value.render()),
                None => {
                    // context was swapped without re-tokenizing, keep the marker
                    out.push(':');
                    out.push_str(name);
                }
            },
        }
    }

    /// Write a descriptor of the token, used in debug mode
    pub fn describe(&self, out: &mut String) {
        // _: fmt for string does not fail
        let _ = match self {
            Self::Literal(text) => write!(out, "[literal {text:?}]"),
            Self::Verb(verb) => write!(out, "[verb :{}]", verb.name()),
            Self::Custom(name) => write!(out, "[custom :{name}]"),
        };
    }
}
