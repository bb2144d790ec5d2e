// Copyright 2013-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate num_fraction;
extern crate num_traits;

use num_fraction::{DivisionByZero, Fraction};
use num_traits::{CheckedMul, One, Zero};
use std::collections::HashSet;

fn assert_fraction(numer: i32, denom: i32, actual: Fraction) {
    assert_eq!((numer, denom), (actual.numer(), actual.denom()),
               "unexpected components for {}", actual);
}

fn frac(numer: i32, denom: i32) -> Fraction {
    Fraction::new(numer, denom).unwrap()
}

#[test]
fn test_construction() {
    assert_fraction(-1, 4, frac(1, -4));
    assert_fraction(5, 7, frac(-5, -7));
    assert_fraction(4, 2, frac(4, 2));
    assert_fraction(-13, 1, Fraction::from_int(-13));
    assert_fraction(-13, 1, Fraction::from(-13i32));

    let e = Fraction::new(11, 0).unwrap_err();
    assert_eq!(e, DivisionByZero);
    assert_eq!(e.to_string(), "Division by zero");
}

#[test]
fn test_int_arithmetic() {
    assert_fraction(27, 7, frac(13, 7).add_int(2));
    assert_fraction(-154, 53, frac(111, 53).sub_int(5));
    assert_fraction(-279, 13, frac(93, 13).mul_int(-3));
    assert_fraction(-8, 33, frac(8, 3).div_int(-11).unwrap());
    assert_eq!(frac(8, 3).div_int(0), Err(DivisionByZero));
}

#[test]
fn test_fraction_arithmetic() {
    let f = frac(12, 17);
    assert_fraction(13, 17, f + frac(1, 17));
    assert_fraction(41, 34, f + frac(1, 2));
    assert_fraction(7, 34, f - frac(1, 2));
    assert_fraction(121, 169, frac(11, 13) * frac(11, 13));
    assert_fraction(147, 147, frac(-21, 7).try_div(&frac(-21, 7)).unwrap());
    assert_eq!(f.try_div(&Fraction::ZERO), Err(DivisionByZero));
}

#[test]
fn test_division_by_zero_cases() {
    assert_eq!(frac(3, 5).div_int(0), Err(DivisionByZero));
    assert_eq!(Fraction::ZERO.recip(), Err(DivisionByZero));
    assert_eq!(Fraction::ZERO.pow(-1), Err(DivisionByZero));
    assert_eq!(frac(0, -9).try_div(&Fraction::ONE), Ok(frac(0, 9)));
}

#[test]
fn test_unary() {
    assert_fraction(25, 4, frac(2, 5).pow(-2).unwrap());
    assert_fraction(1, 1, Fraction::ZERO.pow(0).unwrap());
    assert_fraction(-13, 37, frac(-37, 13).recip().unwrap());
    assert_fraction(713, 31, frac(-713, 31).abs());
    assert_fraction(1073, 1477, frac(1073, 1477).reduce());
    assert_fraction(0, 1, frac(0, -13).reduce());
    assert!(frac(0, -13).is_zero());
}

#[test]
fn test_conversions() {
    let f = frac(-1638, 13);
    assert_eq!(f.as_i8(), -126);
    assert_eq!(f.as_i16(), -126);
    assert_eq!(f.as_i32(), -126);
    assert_eq!(f.as_i64(), -126);
    assert!((f.as_f64() + 126.0).abs() < 0.01);
    assert!((f.as_f32() + 126.0).abs() < 0.01);
}

#[test]
fn test_text() {
    assert_eq!(Fraction::ZERO.to_string(), "0");
    assert_eq!(frac(-32000, 1).to_string(), "-32000");
    assert_eq!(frac(51, -48).to_string(), "-51/48");
    assert_eq!("51/-48".parse::<Fraction>(), Ok(frac(-51, 48)));
}

#[test]
fn test_structural_identity() {
    let mut set = HashSet::new();
    set.insert(frac(1, 2));
    set.insert(frac(2, 4));
    set.insert(frac(-1, -2));
    assert_eq!(set.len(), 2);
    assert!(frac(1, 2).value_eq(&frac(2, 4)));
}

#[test]
fn test_generic_num() {
    fn sum<T: Zero + Copy>(xs: &[T]) -> T {
        xs.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    let xs = [frac(1, 2), frac(1, 3), frac(1, 6)];
    assert!(sum(&xs).value_eq(&Fraction::one()));
    assert_eq!(frac(1, 65536).checked_mul(&frac(1, 65536)), None);
}
