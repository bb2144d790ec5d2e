// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversions between `Fraction` and primitive or `num` types.
//!
//! The `as_*` methods follow `as` casts: the quotient is truncated toward
//! zero and narrowed by wrapping. The `ToPrimitive` impl is the checked
//! counterpart and returns `None` when the truncated value does not fit.

use num_rational::Ratio;
use num_traits::ToPrimitive;

use crate::error::DivisionByZero;
use crate::fraction::Fraction;

impl Fraction {
    /// Converts to an `i32`, rounding towards zero.
    ///
    /// ```
    /// use num_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(13, 3).unwrap().as_i32(), 4);
    /// assert_eq!(Fraction::new(-4, 3).unwrap().as_i32(), -1);
    /// ```
    #[inline]
    pub const fn as_i32(&self) -> i32 {
        // the denominator is positive, so this cannot be i32::MIN / -1
        self.numer() / self.denom()
    }

    /// Converts to an `i64`, rounding towards zero.
    #[inline]
    pub const fn as_i64(&self) -> i64 {
        self.as_i32() as i64
    }

    /// Converts to an `i16`, rounding towards zero and then wrapping.
    ///
    /// ```
    /// use num_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(160000, 5).unwrap().as_i16(), 32000);
    /// assert_eq!(Fraction::from_int(40000).as_i16(), -25536);
    /// ```
    #[inline]
    pub const fn as_i16(&self) -> i16 {
        self.as_i32() as i16
    }

    /// Converts to an `i8`, rounding towards zero and then wrapping.
    ///
    /// ```
    /// use num_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(-1638, 13).unwrap().as_i8(), -126);
    /// assert_eq!(Fraction::from_int(300).as_i8(), 44);
    /// ```
    #[inline]
    pub const fn as_i8(&self) -> i8 {
        self.as_i32() as i8
    }

    /// Divides the numerator by the denominator in `f64`.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.numer()) / f64::from(self.denom())
    }

    /// Divides the numerator by the denominator in `f32`.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        self.numer() as f32 / self.denom() as f32
    }
}

impl ToPrimitive for Fraction {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        Some(self.as_i64())
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.as_i32().to_u64()
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        Some(self.as_f32())
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64())
    }
}

// From integer
impl From<i32> for Fraction {
    #[inline]
    fn from(n: i32) -> Fraction {
        Fraction::from_int(n)
    }
}

// From pair (through the `new` constructor)
impl TryFrom<(i32, i32)> for Fraction {
    type Error = DivisionByZero;

    #[inline]
    fn try_from(pair: (i32, i32)) -> Result<Fraction, DivisionByZero> {
        Fraction::new(pair.0, pair.1)
    }
}

impl From<Fraction> for (i32, i32) {
    #[inline]
    fn from(f: Fraction) -> (i32, i32) {
        (f.numer(), f.denom())
    }
}

/// `Ratio` always reduces, so the result is in lowest terms.
impl From<Fraction> for Ratio<i32> {
    #[inline]
    fn from(f: Fraction) -> Ratio<i32> {
        Ratio::new(f.numer(), f.denom())
    }
}

/// Keeps the components of the ratio as they are, so a `Ratio` built with
/// `new_raw` stays unreduced.
impl TryFrom<Ratio<i32>> for Fraction {
    type Error = DivisionByZero;

    #[inline]
    fn try_from(r: Ratio<i32>) -> Result<Fraction, DivisionByZero> {
        Fraction::new(*r.numer(), *r.denom())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fraction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.numer(), self.denom()), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fraction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Unexpected};

        let (numer, denom): (i32, i32) = serde::Deserialize::deserialize(deserializer)?;
        if denom == 0 {
            return Err(D::Error::invalid_value(
                Unexpected::Signed(0),
                &"a non-zero denominator",
            ));
        }
        Fraction::normalize(numer, denom)
            .ok_or_else(|| D::Error::custom("fraction cannot be normalized within i32"))
    }
}

#[cfg(test)]
mod test {
    use crate::error::DivisionByZero;
    use crate::Fraction;

    use num_rational::Ratio;
    use num_traits::{NumCast, ToPrimitive};

    fn frac(numer: i32, denom: i32) -> Fraction {
        Fraction::new(numer, denom).unwrap()
    }

    #[test]
    fn test_as_i8() {
        assert_eq!(frac(13, 3).as_i8(), 4);
        assert_eq!(frac(1, 4).as_i8(), 0);
        assert_eq!(frac(-4, 3).as_i8(), -1);
        assert_eq!(frac(-1638, 13).as_i8(), -126);
        assert_eq!(frac(-1, 4).as_i8(), 0);
        assert_eq!(frac(300, 1).as_i8(), 44);
        assert_eq!(frac(-775, 3).as_i8(), -2);
    }

    #[test]
    fn test_as_i16() {
        assert_eq!(frac(13, 3).as_i16(), 4);
        assert_eq!(frac(1, 4).as_i16(), 0);
        assert_eq!(frac(-4, 3).as_i16(), -1);
        assert_eq!(frac(160000, 5).as_i16(), 32000);
    }

    #[test]
    fn test_as_i32() {
        assert_eq!(frac(13, 3).as_i32(), 4);
        assert_eq!(frac(1, 4).as_i32(), 0);
        assert_eq!(frac(-4, 3).as_i32(), -1);
        assert_eq!(frac(1358016, 11).as_i32(), 123456);
        assert_eq!(frac(i32::MIN, 1).as_i32(), i32::MIN);
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(frac(13, 3).as_i64(), 4);
        assert_eq!(frac(1, 4).as_i64(), 0);
        assert_eq!(frac(-4, 3).as_i64(), -1);
        assert_eq!(frac(1358016, 11).as_i64(), 123456);
    }

    #[test]
    fn test_as_float() {
        assert!((frac(1, 3).as_f64() - 1.0 / 3.0).abs() < 1e-10);
        assert!((frac(123456, 101).as_f64() - 123456.0 / 101.0).abs() < 1e-10);
        assert_eq!(frac(1, 3).as_f32(), 1f32 / 3f32);
        assert_eq!(frac(123456, 101).as_f32(), 123456f32 / 101f32);
        assert_eq!(frac(-3, 4).as_f64(), -0.75);
    }

    #[test]
    fn test_to_primitive() {
        let f = frac(-1638, 13);
        assert_eq!(f.to_i64(), Some(-126));
        assert_eq!(f.to_i8(), Some(-126));
        assert_eq!(f.to_u32(), None);
        assert_eq!(frac(160000, 1).to_i16(), None);
        assert_eq!(frac(160000, 1).to_u32(), Some(160000));
        assert_eq!(frac(1, 2).to_f64(), Some(0.5));

        let g: Option<u8> = NumCast::from(frac(511, 2));
        assert_eq!(g, Some(255));
    }

    #[test]
    fn test_from_int() {
        assert_eq!(Fraction::from(-13i32), Fraction::from_int(-13));
    }

    #[test]
    fn test_pair() {
        assert_eq!(Fraction::try_from((1i32, -2i32)), Ok(frac(-1, 2)));
        assert_eq!(Fraction::try_from((1i32, 0i32)), Err(DivisionByZero));
        let pair: (i32, i32) = frac(6, -4).into();
        assert_eq!(pair, (-6, 4));
    }

    #[test]
    fn test_ratio() {
        let r: Ratio<i32> = frac(6, -4).into();
        assert_eq!(r, Ratio::new(-3, 2));

        assert_eq!(Fraction::try_from(Ratio::<i32>::new_raw(2, 4)), Ok(frac(2, 4)));
        assert_eq!(Fraction::try_from(Ratio::<i32>::new_raw(1, -3)), Ok(frac(-1, 3)));
        assert_eq!(Fraction::try_from(Ratio::<i32>::new_raw(1, 0)), Err(DivisionByZero));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let f = frac(3, -4);
        assert_eq!(serde_json::to_string(&f).unwrap(), "[-3,4]");
        assert_eq!(serde_json::from_str::<Fraction>("[2,-4]").unwrap(), frac(-2, 4));
        assert!(serde_json::from_str::<Fraction>("[1,0]").is_err());
        assert!(serde_json::from_str::<Fraction>("[-2147483648,-1]").is_err());
    }
}
