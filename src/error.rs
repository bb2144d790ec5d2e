// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types.

use core::fmt;

/// The error returned when an operation would divide by zero.
///
/// Produced by [`Fraction::new`](crate::Fraction::new) with a zero
/// denominator, by dividing by zero, and by taking the reciprocal of zero
/// (directly or through a negative power).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Division by zero")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DivisionByZero {}

/// The error returned when parsing a `Fraction` from a string fails.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParseFractionError {
    kind: FractionErrorKind,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum FractionErrorKind {
    ParseError,
    ZeroDenominator,
}

impl ParseFractionError {
    pub(crate) const fn parse() -> ParseFractionError {
        ParseFractionError { kind: FractionErrorKind::ParseError }
    }

    pub(crate) const fn zero_denominator() -> ParseFractionError {
        ParseFractionError { kind: FractionErrorKind::ZeroDenominator }
    }

    /// Returns true if parsing failed because the denominator was zero.
    pub fn is_zero_denominator(&self) -> bool {
        self.kind == FractionErrorKind::ZeroDenominator
    }
}

impl From<DivisionByZero> for ParseFractionError {
    fn from(_: DivisionByZero) -> ParseFractionError {
        ParseFractionError::zero_denominator()
    }
}

impl fmt::Display for ParseFractionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.kind.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFractionError {}

impl FractionErrorKind {
    fn description(&self) -> &'static str {
        match *self {
            FractionErrorKind::ParseError => "failed to parse integer",
            FractionErrorKind::ZeroDenominator => "zero value denominator",
        }
    }
}
