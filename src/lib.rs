// Copyright 2014-2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fractions of `i32`s that are never reduced behind your back.
//!
//! A [`Fraction`] keeps the numerator and denominator it was built with,
//! only moving a negative sign from the denominator to the numerator.
//! Arithmetic follows the schoolbook rules, so `1/2 + 1/3` is `5/6` but
//! `1/4 * 2/1` is `2/4`. Call [`Fraction::reduce`] to get lowest terms.
//!
//! Equality and hashing are structural: `1/2 != 2/4`. Use
//! [`Fraction::value_eq`] and [`Fraction::value_cmp`] to compare the
//! represented numbers.
//!
//! Operations that would divide by zero return [`DivisionByZero`]; the `/`
//! operator panics instead, like integer division. Any `i32` overflow panics,
//! while the `num_traits` `Checked*` impls return `None`.
//!
//! ## Example
//!
//! ```
//! use num_fraction::{DivisionByZero, Fraction};
//!
//! # fn main() -> Result<(), DivisionByZero> {
//! let a = Fraction::new(12, 17)?;
//! let b = Fraction::new(1, -2)?;
//!
//! assert_eq!((a + b).to_string(), "7/34");
//! assert_eq!((a * 2).to_string(), "24/17");
//! assert_eq!(Fraction::new(6, 4)?.reduce().to_string(), "3/2");
//! assert_eq!(a.try_div(&Fraction::ZERO), Err(DivisionByZero));
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls. Without it the crate is
//!   `no_std`.
//! - `serde`: (de)serializes a fraction as a `(numer, denom)` tuple.
//! - `quickcheck`: an `Arbitrary` impl for property tests.
#![doc(html_root_url = "https://docs.rs/num-fraction/0.1")]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub use crate::error::{DivisionByZero, ParseFractionError};
pub use crate::fraction::Fraction;

mod convert;
mod error;
mod fraction;
mod ops;
#[cfg(any(test, feature = "quickcheck"))]
mod quickcheck_impls;
