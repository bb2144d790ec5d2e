use quickcheck::{Arbitrary, Gen};
use std::boxed::Box;

use crate::Fraction;

/// Components are drawn from the `i16` range so that sums and products of
/// two arbitrary fractions stay representable.
impl Arbitrary for Fraction {
    fn arbitrary(g: &mut Gen) -> Self {
        let numer = i32::from(i16::arbitrary(g));
        let denom = match i16::arbitrary(g) {
            0 => 1,
            d => i32::from(d),
        };
        // an i16 always negates within i32
        Fraction::new(numer, denom).unwrap_or(Fraction::ZERO)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let (numer, denom) = (self.numer(), self.denom());
        let numers = numer
            .shrink()
            .filter_map(move |n| Fraction::new(n, denom).ok());
        let denoms = denom
            .shrink()
            .filter_map(move |d| Fraction::new(numer, d).ok());
        Box::new(numers.chain(denoms))
    }
}
