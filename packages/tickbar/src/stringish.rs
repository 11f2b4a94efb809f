use std::borrow::Cow;

use crate::ContextError;

/// A value substituted for a custom verb.
///
/// Either a pre-formatted string, or a number that is formatted with a
/// default rule when rendered:
/// - integers are printed in plain decimal
/// - floats are printed with 2 decimals
#[derive(Debug, Clone, PartialEq)]
pub enum Stringish {
    Str(String),
    Int(i128),
    Float(f64),
}

impl Stringish {
    /// Create a value from anything that can be displayed in a template
    ///
    /// ```rust
    /// use tickbar::Stringish;
    /// assert_eq!(Stringish::new("build").unwrap().render(), "build");
    /// assert_eq!(Stringish::new(42u8).unwrap().render(), "42");
    /// assert_eq!(Stringish::new(0.5f32).unwrap().render(), "0.50");
    /// assert!(Stringish::new(f64::NAN).is_err());
    /// ```
    #[inline(always)]
    pub fn new<T: IntoStringish>(value: T) -> Result<Self, ContextError> {
        value.into_stringish()
    }

    /// Render the value for display
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Float(f) => Cow::Owned(format!("{f:.2}")),
        }
    }

    fn float(x: f64) -> Result<Self, ContextError> {
        if !x.is_finite() {
            return Err(ContextError::InvalidContextValue(format!(
                "{x} is not a finite number"
            )));
        }
        Ok(Self::Float(x))
    }
}

impl std::fmt::Display for Stringish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Conversion into a [`Stringish`] value.
///
/// This is implemented for strings, chars and all primitive numbers.
/// Non-finite floats and `u128` values above `i128::MAX` are rejected.
pub trait IntoStringish {
    fn into_stringish(self) -> Result<Stringish, ContextError>;
}

impl IntoStringish for Stringish {
    fn into_stringish(self) -> Result<Stringish, ContextError> {
        match self {
            Self::Float(x) => Stringish::float(x),
            other => Ok(other),
        }
    }
}

#[rustfmt::skip]
const _: () = {
    impl IntoStringish for &str { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Str(self.to_string())) } }
    impl IntoStringish for String { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Str(self)) } }
    impl IntoStringish for &String { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Str(self.clone())) } }
    impl IntoStringish for Cow<'_, str> { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Str(self.into_owned())) } }
    impl IntoStringish for char { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Str(self.to_string())) } }
    impl IntoStringish for u8 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self.into())) } }
    impl IntoStringish for u16 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self.into())) } }
    impl IntoStringish for u32 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self.into())) } }
    impl IntoStringish for u64 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self.into())) } }
    impl IntoStringish for usize { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self as i128)) } }
    impl IntoStringish for i8 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self.into())) } }
    impl IntoStringish for i16 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self.into())) } }
    impl IntoStringish for i32 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self.into())) } }
    impl IntoStringish for i64 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self.into())) } }
    impl IntoStringish for isize { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self as i128)) } }
    impl IntoStringish for i128 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Ok(Stringish::Int(self)) } }
    impl IntoStringish for f32 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Stringish::float(self.into()) } }
    impl IntoStringish for f64 { #[inline(always)] fn into_stringish(self) -> Result<Stringish, ContextError> { Stringish::float(self) } }
};

impl IntoStringish for u128 {
    fn into_stringish(self) -> Result<Stringish, ContextError> {
        match i128::try_from(self) {
            Ok(x) => Ok(Stringish::Int(x)),
            Err(_) => Err(ContextError::InvalidContextValue(format!(
                "{self} is too large"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_verbatim() {
        let value = Stringish::new("  spaced :bar  ").unwrap();
        assert_eq!(value.render(), "  spaced :bar  ");
        assert_eq!(value.to_string(), "  spaced :bar  ");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(Stringish::new(-7i64).unwrap().render(), "-7");
        assert_eq!(Stringish::new(u64::MAX).unwrap().render(), "18446744073709551615");
        assert_eq!(Stringish::new(1.0f64).unwrap().render(), "1.00");
        assert_eq!(Stringish::new(12.3456f64).unwrap().render(), "12.35");
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(Stringish::new(i128::MIN).unwrap().render(), i128::MIN.to_string());
        assert_eq!(Stringish::new(i128::MAX as u128).unwrap().render(), i128::MAX.to_string());
        let err = Stringish::new(u128::MAX).unwrap_err();
        assert!(matches!(err, ContextError::InvalidContextValue(_)));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Stringish::new(x).unwrap_err();
            assert!(matches!(err, ContextError::InvalidContextValue(_)));
        }
        assert!(Stringish::Float(f64::NAN).into_stringish().is_err());
    }
}
