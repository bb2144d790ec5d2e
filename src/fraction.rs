// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `Fraction` type: construction, arithmetic and textual form.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use num_integer::Integer;
use num_traits::checked_pow;

use crate::error::{DivisionByZero, ParseFractionError};

/// A fraction `numer/denom` of `i32`s.
///
/// The denominator is always positive, but the fraction is never reduced
/// implicitly: `2/4` and `1/2` are different values under `==` and `Hash`.
/// Use [`reduce`](Fraction::reduce) to get lowest terms and
/// [`value_eq`](Fraction::value_eq) to compare the represented numbers.
///
/// Every operation returns a new `Fraction`. Arithmetic that overflows `i32`
/// panics in all build profiles; the `num_traits` `Checked*` impls return
/// `None` instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: i32,
    denom: i32,
}

#[cold]
#[inline(never)]
pub(crate) fn overflow(op: &str) -> ! {
    panic!("attempt to {} with overflow", op)
}

impl Fraction {
    /// The fraction `0/1`.
    pub const ZERO: Fraction = Fraction { numer: 0, denom: 1 };

    /// The fraction `1/1`.
    pub const ONE: Fraction = Fraction { numer: 1, denom: 1 };

    /// Creates a new `Fraction`, moving any sign of `denom` onto the numerator.
    ///
    /// The magnitude is kept as given; no reduction happens here.
    ///
    /// ```
    /// use num_fraction::{DivisionByZero, Fraction};
    ///
    /// let f = Fraction::new(1, -4).unwrap();
    /// assert_eq!((f.numer(), f.denom()), (-1, 4));
    /// assert_eq!(Fraction::new(11, 0), Err(DivisionByZero));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the sign cannot be moved because a component is `i32::MIN`.
    #[inline]
    pub fn new(numer: i32, denom: i32) -> Result<Fraction, DivisionByZero> {
        if denom == 0 {
            return Err(DivisionByZero);
        }
        match Fraction::normalize(numer, denom) {
            Some(f) => Ok(f),
            None => overflow("negate"),
        }
    }

    /// Creates a `Fraction` representing the integer `n`, i.e. `n/1`.
    #[inline]
    pub const fn from_int(n: i32) -> Fraction {
        Fraction { numer: n, denom: 1 }
    }

    /// Makes `denom` positive. `denom` must be non-zero.
    pub(crate) fn normalize(numer: i32, denom: i32) -> Option<Fraction> {
        if denom < 0 {
            Some(Fraction {
                numer: numer.checked_neg()?,
                denom: denom.checked_neg()?,
            })
        } else {
            Some(Fraction { numer, denom })
        }
    }

    /// Gets the numerator.
    #[inline]
    pub const fn numer(&self) -> i32 {
        self.numer
    }

    /// Gets the denominator, which is always positive.
    #[inline]
    pub const fn denom(&self) -> i32 {
        self.denom
    }

    /// Returns true if the numerator is zero, whatever the denominator.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Returns true if the denominator is 1.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.denom == 1
    }

    /// Returns true if the fraction is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.numer > 0
    }

    /// Returns true if the fraction is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.numer < 0
    }

    /// Returns `1`, `0` or `-1` as a `Fraction` depending on the sign.
    #[inline]
    pub const fn signum(&self) -> Fraction {
        Fraction::from_int(self.numer.signum())
    }

    /// Adds the integer `n`: `(numer + n*denom)/denom`.
    #[inline]
    pub fn add_int(&self, n: i32) -> Fraction {
        match self.checked_add_int(n) {
            Some(f) => f,
            None => overflow("add"),
        }
    }

    /// Subtracts the integer `n`: `(numer - n*denom)/denom`.
    ///
    /// ```
    /// use num_fraction::Fraction;
    ///
    /// let f = Fraction::new(111, 53).unwrap().sub_int(5);
    /// assert_eq!((f.numer(), f.denom()), (-154, 53));
    /// ```
    #[inline]
    pub fn sub_int(&self, n: i32) -> Fraction {
        match self.checked_sub_int(n) {
            Some(f) => f,
            None => overflow("subtract"),
        }
    }

    /// Multiplies by the integer `n`: `(numer*n)/denom`.
    ///
    /// The denominator is kept even when `n` is zero.
    #[inline]
    pub fn mul_int(&self, n: i32) -> Fraction {
        match self.checked_mul_int(n) {
            Some(f) => f,
            None => overflow("multiply"),
        }
    }

    /// Divides by the integer `n`: `numer/(denom*n)`, with the sign of `n`
    /// moved onto the numerator.
    ///
    /// ```
    /// use num_fraction::Fraction;
    ///
    /// let f = Fraction::new(8, 3).unwrap().div_int(-11).unwrap();
    /// assert_eq!((f.numer(), f.denom()), (-8, 33));
    /// ```
    #[inline]
    pub fn div_int(&self, n: i32) -> Result<Fraction, DivisionByZero> {
        if n == 0 {
            return Err(DivisionByZero);
        }
        match self.checked_div_int(n) {
            Some(f) => Ok(f),
            None => overflow("divide"),
        }
    }

    /// Divides by another fraction: `(a/b) / (c/d) = (a*d)/(b*c)`.
    ///
    /// The `/` operator does the same but panics on a zero divisor.
    #[inline]
    pub fn try_div(&self, other: &Fraction) -> Result<Fraction, DivisionByZero> {
        if other.is_zero() {
            return Err(DivisionByZero);
        }
        match self.checked_div_fraction(other) {
            Some(f) => Ok(f),
            None => overflow("divide"),
        }
    }

    /// Raises the fraction to the power `expon`.
    ///
    /// Any fraction to the power zero is `1/1`, including zero itself. A
    /// negative exponent gives the reciprocal of the positive power, so it
    /// fails for a zero fraction.
    ///
    /// ```
    /// use num_fraction::Fraction;
    ///
    /// let f = Fraction::new(2, 5).unwrap();
    /// assert_eq!(f.pow(-2), Fraction::new(25, 4));
    /// assert_eq!(Fraction::ZERO.pow(0), Ok(Fraction::ONE));
    /// ```
    pub fn pow(&self, expon: i32) -> Result<Fraction, DivisionByZero> {
        match expon.cmp(&0) {
            Ordering::Equal => Ok(Fraction::ONE),
            Ordering::Greater => match self.checked_pow(expon.unsigned_abs()) {
                Some(f) => Ok(f),
                None => overflow("multiply"),
            },
            Ordering::Less => {
                if self.is_zero() {
                    return Err(DivisionByZero);
                }
                let raised = match self.checked_pow(expon.unsigned_abs()) {
                    Some(f) => f,
                    None => overflow("multiply"),
                };
                raised.recip()
            }
        }
    }

    /// Returns the reciprocal `denom/numer`, keeping the denominator positive.
    ///
    /// Fails if the fraction is zero.
    #[inline]
    pub fn recip(&self) -> Result<Fraction, DivisionByZero> {
        match self.numer.cmp(&0) {
            Ordering::Equal => Err(DivisionByZero),
            Ordering::Greater => Ok(Fraction {
                numer: self.denom,
                denom: self.numer,
            }),
            Ordering::Less => match Fraction::normalize(self.denom, self.numer) {
                Some(f) => Ok(f),
                None => overflow("negate"),
            },
        }
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Fraction {
        match self.numer.checked_abs() {
            Some(numer) => Fraction { numer, denom: self.denom },
            None => overflow("negate"),
        }
    }

    /// Returns a copy in lowest terms. Zero reduces to `0/1`.
    ///
    /// ```
    /// use num_fraction::Fraction;
    ///
    /// let f = Fraction::new(1329577, 4002509).unwrap().reduce();
    /// assert_eq!((f.numer(), f.denom()), (193, 581));
    /// ```
    pub fn reduce(&self) -> Fraction {
        // gcd(0, d) == d and the denominator is positive, so `g` is never 0.
        let g = self.numer.gcd(&self.denom);
        Fraction {
            numer: self.numer / g,
            denom: self.denom / g,
        }
    }

    /// Compares the represented numbers, unlike `==` which compares the
    /// stored components.
    ///
    /// ```
    /// use num_fraction::Fraction;
    /// use std::cmp::Ordering;
    ///
    /// let half = Fraction::new(1, 2).unwrap();
    /// let two_quarters = Fraction::new(2, 4).unwrap();
    /// assert_ne!(half, two_quarters);
    /// assert_eq!(half.value_cmp(&two_quarters), Ordering::Equal);
    /// ```
    pub fn value_cmp(&self, other: &Fraction) -> Ordering {
        // Both denominators are positive, so a/b ? c/d is a*d ? c*b, and an
        // i32 product always fits in an i64.
        let ad = i64::from(self.numer) * i64::from(other.denom);
        let cb = i64::from(other.numer) * i64::from(self.denom);
        ad.cmp(&cb)
    }

    /// Returns true if both fractions represent the same number.
    #[inline]
    pub fn value_eq(&self, other: &Fraction) -> bool {
        self.value_cmp(other) == Ordering::Equal
    }

    pub(crate) fn checked_add_int(&self, n: i32) -> Option<Fraction> {
        let numer = i64::from(self.numer) + i64::from(n) * i64::from(self.denom);
        Some(Fraction {
            numer: i32::try_from(numer).ok()?,
            denom: self.denom,
        })
    }

    pub(crate) fn checked_sub_int(&self, n: i32) -> Option<Fraction> {
        let numer = i64::from(self.numer) - i64::from(n) * i64::from(self.denom);
        Some(Fraction {
            numer: i32::try_from(numer).ok()?,
            denom: self.denom,
        })
    }

    pub(crate) fn checked_mul_int(&self, n: i32) -> Option<Fraction> {
        Some(Fraction {
            numer: self.numer.checked_mul(n)?,
            denom: self.denom,
        })
    }

    // `n` must be non-zero.
    pub(crate) fn checked_div_int(&self, n: i32) -> Option<Fraction> {
        Fraction::normalize(self.numer, self.denom.checked_mul(n)?)
    }

    pub(crate) fn checked_neg(&self) -> Option<Fraction> {
        Some(Fraction {
            numer: self.numer.checked_neg()?,
            denom: self.denom,
        })
    }

    // a/b + c/d = (a*d + c*b)/(b*d), or (a + c)/b when the denominators
    // already agree.
    pub(crate) fn checked_add_fraction(&self, other: &Fraction) -> Option<Fraction> {
        if self.denom == other.denom {
            return Some(Fraction {
                numer: self.numer.checked_add(other.numer)?,
                denom: self.denom,
            });
        }
        // i32 products always fit in an i64; only the result must fit an i32
        let ad = i64::from(self.numer) * i64::from(other.denom);
        let cb = i64::from(other.numer) * i64::from(self.denom);
        Some(Fraction {
            numer: i32::try_from(ad + cb).ok()?,
            denom: self.denom.checked_mul(other.denom)?,
        })
    }

    // a/b - c/d = (a*d - c*b)/(b*d), or (a - c)/b when the denominators
    // already agree.
    pub(crate) fn checked_sub_fraction(&self, other: &Fraction) -> Option<Fraction> {
        if self.denom == other.denom {
            return Some(Fraction {
                numer: self.numer.checked_sub(other.numer)?,
                denom: self.denom,
            });
        }
        let ad = i64::from(self.numer) * i64::from(other.denom);
        let cb = i64::from(other.numer) * i64::from(self.denom);
        Some(Fraction {
            numer: i32::try_from(ad - cb).ok()?,
            denom: self.denom.checked_mul(other.denom)?,
        })
    }

    // a/b * c/d = (a*c)/(b*d)
    pub(crate) fn checked_mul_fraction(&self, other: &Fraction) -> Option<Fraction> {
        if *self == Fraction::ZERO || *other == Fraction::ZERO {
            return Some(Fraction::ZERO);
        }
        Some(Fraction {
            numer: self.numer.checked_mul(other.numer)?,
            denom: self.denom.checked_mul(other.denom)?,
        })
    }

    // (a/b) / (c/d) = (a*d)/(b*c); `other` must be non-zero.
    pub(crate) fn checked_div_fraction(&self, other: &Fraction) -> Option<Fraction> {
        Fraction::normalize(
            self.numer.checked_mul(other.denom)?,
            self.denom.checked_mul(other.numer)?,
        )
    }

    fn checked_pow(&self, expon: u32) -> Option<Fraction> {
        let expon = expon as usize;
        Some(Fraction {
            numer: checked_pow(self.numer, expon)?,
            denom: checked_pow(self.denom, expon)?,
        })
    }
}

impl Default for Fraction {
    #[inline]
    fn default() -> Fraction {
        Fraction::ZERO
    }
}

// String conversions
impl fmt::Display for Fraction {
    /// Renders `0` for any zero, `numer` if denom is 1, and `numer/denom`
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.numer == 0 {
            f.write_str("0")
        } else if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// Parses `numer/denom` or just `numer`, without reducing.
    fn from_str(s: &str) -> Result<Fraction, ParseFractionError> {
        let mut split = s.splitn(2, '/');

        let n = split.next().ok_or_else(ParseFractionError::parse)?;
        let numer: i32 = n.parse().map_err(|_| ParseFractionError::parse())?;

        let denom: i32 = match split.next() {
            Some(d) => d.parse().map_err(|_| ParseFractionError::parse())?,
            None => 1,
        };

        if denom == 0 {
            return Err(ParseFractionError::zero_denominator());
        }
        Fraction::normalize(numer, denom).ok_or_else(ParseFractionError::parse)
    }
}
