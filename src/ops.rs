// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operator and `num_traits` implementations for `Fraction`.

use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, One, Zero};

use crate::fraction::{overflow, Fraction};

macro_rules! forward_val_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: Fraction) -> Fraction {
                (&self).$method(&other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a> $imp<Fraction> for &'a Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: Fraction) -> Fraction {
                self.$method(&other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident, $method:ident) => {
        impl<'a> $imp<&'a Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, other: &Fraction) -> Fraction {
                (&self).$method(other)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident, $method:ident) => {
        forward_val_val_binop!(impl $imp, $method);
        forward_ref_val_binop!(impl $imp, $method);
        forward_val_ref_binop!(impl $imp, $method);
    };
}

// Abstracts the ops that can only fail by overflowing
macro_rules! arith_impl {
    (impl $imp:ident, $method:ident, $checked:ident, $verb:expr) => {
        forward_all_binop!(impl $imp, $method);
        impl<'a, 'b> $imp<&'b Fraction> for &'a Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: &Fraction) -> Fraction {
                match self.$checked(rhs) {
                    Some(f) => f,
                    None => overflow($verb),
                }
            }
        }
    };
}

// a/b + c/d = (a*d + c*b)/(b*d)
arith_impl!(impl Add, add, checked_add_fraction, "add");

// a/b - c/d = (a*d - c*b)/(b*d)
arith_impl!(impl Sub, sub, checked_sub_fraction, "subtract");

// a/b * c/d = (a*c)/(b*d)
arith_impl!(impl Mul, mul, checked_mul_fraction, "multiply");

forward_all_binop!(impl Div, div);
// (a/b) / (c/d) = (a*d)/(b*c)
impl<'a, 'b> Div<&'b Fraction> for &'a Fraction {
    type Output = Fraction;

    #[inline]
    fn div(self, rhs: &Fraction) -> Fraction {
        match self.try_div(rhs) {
            Ok(f) => f,
            Err(e) => panic!("{}", e),
        }
    }
}

// Arithmetic with a plain `i32` on the right
macro_rules! int_binop {
    (impl $imp:ident, $method:ident, $int_method:ident) => {
        impl $imp<i32> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, n: i32) -> Fraction {
                self.$int_method(n)
            }
        }

        impl<'a> $imp<i32> for &'a Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, n: i32) -> Fraction {
                self.$int_method(n)
            }
        }
    };
}

int_binop!(impl Add, add, add_int);
int_binop!(impl Sub, sub, sub_int);
int_binop!(impl Mul, mul, mul_int);

impl Div<i32> for Fraction {
    type Output = Fraction;

    #[inline]
    fn div(self, n: i32) -> Fraction {
        (&self).div(n)
    }
}

impl<'a> Div<i32> for &'a Fraction {
    type Output = Fraction;

    #[inline]
    fn div(self, n: i32) -> Fraction {
        match self.div_int(n) {
            Ok(f) => f,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    #[inline]
    fn neg(self) -> Fraction {
        -&self
    }
}

impl<'a> Neg for &'a Fraction {
    type Output = Fraction;

    #[inline]
    fn neg(self) -> Fraction {
        match CheckedNeg::checked_neg(self) {
            Some(f) => f,
            None => overflow("negate"),
        }
    }
}

// Checked arithmetic
macro_rules! checked_impl {
    ($trait_name:ident, $method:ident, $checked:ident) => {
        impl $trait_name for Fraction {
            #[inline]
            fn $method(&self, v: &Fraction) -> Option<Fraction> {
                self.$checked(v)
            }
        }
    };
}

checked_impl!(CheckedAdd, checked_add, checked_add_fraction);
checked_impl!(CheckedSub, checked_sub, checked_sub_fraction);
checked_impl!(CheckedMul, checked_mul, checked_mul_fraction);

impl CheckedDiv for Fraction {
    /// Returns `None` on a zero divisor as well as on overflow.
    #[inline]
    fn checked_div(&self, v: &Fraction) -> Option<Fraction> {
        if v.is_zero() {
            None
        } else {
            self.checked_div_fraction(v)
        }
    }
}

impl CheckedNeg for Fraction {
    #[inline]
    fn checked_neg(&self) -> Option<Fraction> {
        Fraction::checked_neg(self)
    }
}

// Constants
impl Zero for Fraction {
    #[inline]
    fn zero() -> Fraction {
        Fraction::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }
}

impl One for Fraction {
    #[inline]
    fn one() -> Fraction {
        Fraction::ONE
    }
}
