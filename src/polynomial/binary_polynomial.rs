// src/polynomial/binary_polynomial.rs

use std::cmp::Ordering;
use std::convert::Infallible;
use std::ops::{BitXor, Index, Mul, Shl, Shr};
use std::str::FromStr;

use bitvec::prelude::{BitSlice, BitVec, Lsb0};
use log::{debug, trace};
use num::{BigUint, One, Zero};

use crate::core::error::PolynomialError;
use crate::polynomial::bit_order::BitOrder;

/// Width in bits of the integer produced by [`BinaryPolynomial::to_int`].
pub const INT_WIDTH: u32 = u64::BITS;

/// Longest polynomial the backing bit vector can address.
pub const MAX_LEN: usize = BitSlice::<usize, Lsb0>::MAX_BITS;

/// Backing storage: bit `i` is the coefficient of `x^i`.
pub type Bits = BitVec<usize, Lsb0>;

/// An element of the polynomial ring GF(2)[x].
///
/// No modulus is applied anywhere, so products grow to `deg(a) + deg(b)`.
/// Values are immutable: every operation returns a fresh polynomial.
///
/// The bit vector is kept trimmed to the highest set bit, which makes the
/// derived `PartialEq`/`Hash` value comparisons.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BinaryPolynomial {
    bits: Bits,
}

impl BinaryPolynomial {
    /// Build from raw bits, dropping any zero bits above the highest set one.
    pub fn from_bits(mut bits: Bits) -> Self {
        let length = bits.last_one().map_or(0, |i| i + 1);
        bits.truncate(length);
        BinaryPolynomial { bits }
    }

    /// Parse a human-written bit string.
    ///
    /// Every character other than `'0'` and `'1'` is ignored, so `"1 0 1"`,
    /// `"1,0,1"` and `"101"` are all `x^2 + 1`. With [`BitOrder::MsbFirst`]
    /// the first remaining character is the highest coefficient; with
    /// [`BitOrder::LsbFirst`] it is the coefficient of `x^0`.
    pub fn parse(text: &str, order: BitOrder) -> Self {
        let mut bits: Bits = text
            .chars()
            .filter_map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect();

        trace!("parsed {} significant digits ({})", bits.len(), order);

        if order == BitOrder::MsbFirst {
            bits.reverse();
        }

        Self::from_bits(bits)
    }

    pub fn parse_msb_first(text: &str) -> Self {
        Self::parse(text, BitOrder::MsbFirst)
    }

    pub fn zero() -> Self {
        BinaryPolynomial { bits: Bits::new() }
    }

    pub fn one() -> Self {
        Self::monomial(0)
    }

    /// `x^degree`
    ///
    /// # Panics
    ///
    /// If `degree >= MAX_LEN`.
    pub fn monomial(degree: usize) -> Self {
        assert!(degree < MAX_LEN, "degree {} exceeds the maximum polynomial length {}", degree, MAX_LEN);
        let mut bits = Bits::repeat(false, degree + 1);
        bits.set(degree, true);
        BinaryPolynomial { bits }
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of significant bits: highest set position + 1, or 0.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_zero()
    }

    /// Highest set position, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.bits.len().checked_sub(1)
    }

    /// Coefficient of `x^position`.
    pub fn bit(&self, position: usize) -> bool {
        self.bits.get(position).map_or(false, |b| *b)
    }

    /// Set positions in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn as_bits(&self) -> &BitSlice<usize, Lsb0> {
        self.bits.as_bitslice()
    }

    /// Coefficient-wise XOR. Operand lengths need not match.
    pub fn add(&self, other: &BinaryPolynomial) -> BinaryPolynomial {
        let mut bits = self.bits.clone();
        xor_into(&mut bits, &other.bits, 0);
        Self::from_bits(bits)
    }

    /// Carry-less product: for each set bit `i` of `other`, XOR in `self << i`.
    pub fn multiply(&self, other: &BinaryPolynomial) -> BinaryPolynomial {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        trace!("multiplying polynomials of length {} and {}", self.len(), other.len());

        let mut product = Bits::repeat(false, self.len() + other.len() - 1);
        for shift in other.bits.iter_ones() {
            xor_into(&mut product, &self.bits, shift);
        }
        Self::from_bits(product)
    }

    pub fn square(&self) -> BinaryPolynomial {
        self.multiply(self)
    }

    /// Linear shift towards higher degrees. Negative amounts shift right.
    ///
    /// # Panics
    ///
    /// If a non-zero polynomial would grow past [`MAX_LEN`] bits; use
    /// [`checked_shift_left`](Self::checked_shift_left) for untrusted amounts.
    pub fn shift_left(&self, amount: isize) -> BinaryPolynomial {
        match amount.cmp(&0) {
            Ordering::Less => self.shift_right_by(amount.unsigned_abs()),
            Ordering::Equal => self.clone(),
            Ordering::Greater => self.shift_left_by(amount.unsigned_abs()),
        }
    }

    /// Linear shift towards lower degrees, discarding bits that fall below
    /// `x^0`. Negative amounts shift left, with the same bound as
    /// [`shift_left`](Self::shift_left).
    pub fn shift_right(&self, amount: isize) -> BinaryPolynomial {
        match amount.cmp(&0) {
            Ordering::Less => self.shift_left_by(amount.unsigned_abs()),
            Ordering::Equal => self.clone(),
            Ordering::Greater => self.shift_right_by(amount.unsigned_abs()),
        }
    }

    /// `shift_left`, or `None` when the result would exceed [`MAX_LEN`].
    pub fn checked_shift_left(&self, amount: isize) -> Option<BinaryPolynomial> {
        if amount > 0 && !self.fits_left_shift(amount.unsigned_abs()) {
            return None;
        }
        Some(self.shift_left(amount))
    }

    /// `shift_right`, or `None` when a negative amount would exceed [`MAX_LEN`].
    pub fn checked_shift_right(&self, amount: isize) -> Option<BinaryPolynomial> {
        if amount < 0 && !self.fits_left_shift(amount.unsigned_abs()) {
            return None;
        }
        Some(self.shift_right(amount))
    }

    fn fits_left_shift(&self, amount: usize) -> bool {
        self.is_zero() || amount <= MAX_LEN - self.len()
    }

    pub fn shift_left_by(&self, amount: usize) -> BinaryPolynomial {
        if amount == 0 || self.is_zero() {
            return self.clone();
        }
        assert!(
            self.fits_left_shift(amount),
            "shift by {} exceeds the maximum polynomial length {}",
            amount,
            MAX_LEN
        );
        let mut bits = Bits::repeat(false, amount);
        bits.extend_from_bitslice(&self.bits);
        BinaryPolynomial { bits }
    }

    pub fn shift_right_by(&self, amount: usize) -> BinaryPolynomial {
        if amount == 0 {
            return self.clone();
        }
        if amount >= self.len() {
            return Self::zero();
        }
        Self::from_bits(Bits::from_bitslice(&self.bits[amount..]))
    }

    /// Value as an unsigned integer, bit `i` contributing `2^i`.
    pub fn to_int(&self) -> Result<u64, PolynomialError> {
        if self.len() > INT_WIDTH as usize {
            debug!("polynomial of length {} overflows u64", self.len());
            return Err(PolynomialError::Overflow {
                length: self.len(),
                width: INT_WIDTH,
            });
        }
        Ok(self.ones().fold(0u64, |acc, i| acc | (1u64 << i)))
    }

    /// Value as an arbitrary-precision unsigned integer.
    pub fn to_biguint(&self) -> BigUint {
        self.ones()
            .fold(BigUint::zero(), |acc, i| acc + (BigUint::one() << i))
    }

    /// Parse MSB-first and convert straight to an integer.
    pub fn int_value_of(text: &str) -> Result<u64, PolynomialError> {
        Self::parse_msb_first(text).to_int()
    }
}

/// XOR `src` into `acc` starting at `offset`, growing `acc` when needed.
fn xor_into(acc: &mut Bits, src: &BitSlice<usize, Lsb0>, offset: usize) {
    let needed = offset + src.len();
    if acc.len() < needed {
        acc.resize(needed, false);
    }
    acc[offset..needed] ^= src;
}

impl FromStr for BinaryPolynomial {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BinaryPolynomial::parse_msb_first(s))
    }
}

impl From<u64> for BinaryPolynomial {
    fn from(value: u64) -> Self {
        let bits: Bits = (0..INT_WIDTH).map(|i| (value >> i) & 1 == 1).collect();
        BinaryPolynomial::from_bits(bits)
    }
}

impl Index<usize> for BinaryPolynomial {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        if self.bit(index) {
            &true
        } else {
            &false
        }
    }
}

impl PartialOrd for BinaryPolynomial {
    fn partial_cmp(&self, other: &BinaryPolynomial) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinaryPolynomial {
    /// Orders as the integers the bit patterns encode.
    fn cmp(&self, other: &BinaryPolynomial) -> Ordering {
        if self.len() != other.len() {
            return self.len().cmp(&other.len());
        }

        for i in (0..self.len()).rev() {
            let a = self.bits[i];
            let b = other.bits[i];
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }
}

impl<'a> std::ops::Add<&'a BinaryPolynomial> for &'a BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn add(self, other: &BinaryPolynomial) -> BinaryPolynomial {
        BinaryPolynomial::add(self, other)
    }
}

impl std::ops::Add for BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn add(self, other: BinaryPolynomial) -> BinaryPolynomial {
        BinaryPolynomial::add(&self, &other)
    }
}

impl<'a> BitXor<&'a BinaryPolynomial> for &'a BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn bitxor(self, other: &BinaryPolynomial) -> BinaryPolynomial {
        BinaryPolynomial::add(self, other)
    }
}

impl BitXor for BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn bitxor(self, other: BinaryPolynomial) -> BinaryPolynomial {
        BinaryPolynomial::add(&self, &other)
    }
}

impl<'a> Mul<&'a BinaryPolynomial> for &'a BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn mul(self, other: &BinaryPolynomial) -> BinaryPolynomial {
        self.multiply(other)
    }
}

impl Mul for BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn mul(self, other: BinaryPolynomial) -> BinaryPolynomial {
        self.multiply(&other)
    }
}

impl Shl<isize> for &BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn shl(self, amount: isize) -> BinaryPolynomial {
        self.shift_left(amount)
    }
}

impl Shl<isize> for BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn shl(self, amount: isize) -> BinaryPolynomial {
        self.shift_left(amount)
    }
}

impl Shr<isize> for &BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn shr(self, amount: isize) -> BinaryPolynomial {
        self.shift_right(amount)
    }
}

impl Shr<isize> for BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn shr(self, amount: isize) -> BinaryPolynomial {
        self.shift_right(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(text: &str) -> BinaryPolynomial {
        BinaryPolynomial::parse_msb_first(text)
    }

    #[test]
    fn test_parse_ignores_separators() {
        let expected = poly("10011");
        assert_eq!(poly("1 0 0 1 1"), expected);
        assert_eq!(poly("1,0,0,1,1"), expected);
        assert_eq!(poly("[1; 0; 0; 1; 1]"), expected);
        assert_eq!(poly("x1y0z0 11\n"), expected);
    }

    #[test]
    fn test_parse_bit_orders() {
        let msb = BinaryPolynomial::parse("110", BitOrder::MsbFirst);
        let lsb = BinaryPolynomial::parse("011", BitOrder::LsbFirst);
        assert_eq!(msb, lsb);
        assert!(msb.bit(2));
        assert!(msb.bit(1));
        assert!(!msb.bit(0));
    }

    #[test]
    fn test_parse_drops_leading_zeros() {
        let p = poly("000101");
        assert_eq!(p.len(), 3);
        assert_eq!(p, poly("101"));

        let lsb = BinaryPolynomial::parse("1000", BitOrder::LsbFirst);
        assert_eq!(lsb, BinaryPolynomial::one());
    }

    #[test]
    fn test_zero_polynomial() {
        for text in ["", "   ", "0", "0000", "abc"] {
            let p = poly(text);
            assert!(p.is_zero());
            assert_eq!(p.len(), 0);
            assert_eq!(p.degree(), None);
            assert_eq!(p.to_int(), Ok(0));
        }
        assert_eq!(BinaryPolynomial::default(), BinaryPolynomial::zero());
    }

    #[test]
    fn test_len_and_degree() {
        let p = poly("10011");
        assert_eq!(p.len(), 5);
        assert_eq!(p.degree(), Some(4));
        assert_eq!(p.ones().collect::<Vec<_>>(), vec![0, 1, 4]);
        assert!(p[4]);
        assert!(!p[2]);
        assert!(!p[100]);
    }

    #[test]
    fn test_add_is_xor() {
        assert_eq!(poly("1100").add(&poly("1010")), poly("0110"));
        assert_eq!(poly("1").add(&poly("10000")), poly("10001"));
        assert_eq!(&poly("101") + &poly("1"), poly("100"));
        assert_eq!(poly("101") ^ poly("100"), poly("1"));
    }

    #[test]
    fn test_add_self_is_zero() {
        let p = poly("1011011");
        assert!(p.add(&p).is_zero());
    }

    #[test]
    fn test_add_cancels_high_bits() {
        let sum = poly("1101").add(&poly("1100"));
        assert_eq!(sum.len(), 1);
        assert_eq!(sum, BinaryPolynomial::one());
    }

    #[test]
    fn test_multiply() {
        // (x + 1) * x = x^2 + x
        assert_eq!(poly("11").multiply(&poly("10")), poly("110"));
        // (x + 1)^2 = x^2 + 1, the cross terms cancel
        assert_eq!(poly("11").multiply(&poly("11")), poly("101"));
        assert_eq!(poly("11").square(), poly("101"));
        // (x^2 + x + 1)(x + 1) = x^3 + 1
        assert_eq!(&poly("111") * &poly("11"), poly("1001"));
    }

    #[test]
    fn test_multiply_by_zero_and_one() {
        let p = poly("100101");
        assert!(p.multiply(&BinaryPolynomial::zero()).is_zero());
        assert!(BinaryPolynomial::zero().multiply(&p).is_zero());
        assert_eq!(p.multiply(&BinaryPolynomial::one()), p);
    }

    #[test]
    fn test_multiply_degree_grows_without_reduction() {
        let a = BinaryPolynomial::monomial(40);
        let b = BinaryPolynomial::monomial(30).add(&BinaryPolynomial::one());
        let product = a.multiply(&b);
        assert_eq!(product.degree(), Some(70));
        assert_eq!(product, BinaryPolynomial::monomial(70).add(&BinaryPolynomial::monomial(40)));
    }

    #[test]
    fn test_shift_left() {
        assert_eq!(poly("101").shift_left(2), poly("10100"));
        assert_eq!(poly("101").shift_left(0), poly("101"));
        assert_eq!(poly("101").shift_left(-1), poly("10"));
        assert!(BinaryPolynomial::zero().shift_left(5).is_zero());
        assert_eq!(&poly("1") << 3, poly("1000"));
    }

    #[test]
    fn test_shift_right() {
        assert_eq!(poly("10110").shift_right(2), poly("101"));
        assert_eq!(poly("10110").shift_right(4), poly("1"));
        assert!(poly("10110").shift_right(5).is_zero());
        assert!(poly("10110").shift_right(500).is_zero());
        assert_eq!(poly("101").shift_right(-2), poly("10100"));
        assert_eq!(poly("1000") >> 3, BinaryPolynomial::one());
    }

    #[test]
    fn test_shift_sign_symmetry() {
        let p = poly("1101001");
        for n in -10isize..=10 {
            assert_eq!(p.shift_left(n), p.shift_right(-n));
            assert_eq!(p.shift_right(n), p.shift_left(-n));
        }
    }

    #[test]
    fn test_shift_extreme_amounts() {
        let p = poly("11");
        assert!(p.shift_right(isize::MAX).is_zero());
        assert!(p.shift_left(isize::MIN).is_zero());
    }

    #[test]
    fn test_checked_shift_bounds() {
        let p = poly("101");
        assert_eq!(p.checked_shift_left(2), Some(poly("10100")));
        assert_eq!(p.checked_shift_right(-2), Some(poly("10100")));
        assert!(p.checked_shift_left(isize::MAX).is_none());
        assert!(p.checked_shift_right(isize::MIN).is_none());
        assert!(p.checked_shift_left((MAX_LEN - 2) as isize).is_none());

        // shrinking and the zero polynomial are never out of range
        assert_eq!(p.checked_shift_left(isize::MIN), Some(BinaryPolynomial::zero()));
        assert_eq!(p.checked_shift_right(isize::MAX), Some(BinaryPolynomial::zero()));
        assert_eq!(BinaryPolynomial::zero().checked_shift_left(isize::MAX), Some(BinaryPolynomial::zero()));
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum polynomial length")]
    fn test_shift_left_past_max_len_panics_with_message() {
        let _ = poly("1").shift_left(isize::MAX);
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum polynomial length")]
    fn test_monomial_past_max_len_panics_with_message() {
        let _ = BinaryPolynomial::monomial(usize::MAX);
    }

    #[test]
    fn test_add_across_word_boundaries() {
        let a = BinaryPolynomial::monomial(130).add(&BinaryPolynomial::monomial(64));
        let b = BinaryPolynomial::monomial(64).add(&BinaryPolynomial::monomial(3));
        assert_eq!(a.add(&b).ones().collect::<Vec<_>>(), vec![3, 130]);
        assert_eq!(b.add(&a).ones().collect::<Vec<_>>(), vec![3, 130]);
    }

    #[test]
    fn test_to_int() {
        assert_eq!(poly("10011").to_int(), Ok(19));
        assert_eq!(poly("110").to_int(), Ok(6));
        assert_eq!(BinaryPolynomial::monomial(63).to_int(), Ok(1u64 << 63));
        assert_eq!(BinaryPolynomial::int_value_of("1,1,1"), Ok(7));
    }

    #[test]
    fn test_to_int_overflow() {
        let p = BinaryPolynomial::monomial(64);
        assert_eq!(
            p.to_int(),
            Err(PolynomialError::Overflow { length: 65, width: 64 })
        );
    }

    #[test]
    fn test_to_biguint_past_int_width() {
        let p = BinaryPolynomial::monomial(100).add(&BinaryPolynomial::one());
        let expected = (BigUint::one() << 100usize) + BigUint::one();
        assert_eq!(p.to_biguint(), expected);
        assert_eq!(BinaryPolynomial::zero().to_biguint(), BigUint::zero());
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(BinaryPolynomial::from(19u64), poly("10011"));
        assert!(BinaryPolynomial::from(0u64).is_zero());
        assert_eq!(BinaryPolynomial::from(u64::MAX).len(), 64);
    }

    #[test]
    fn test_from_str() {
        let p: BinaryPolynomial = "1 1 0".parse().unwrap();
        assert_eq!(p.to_int(), Ok(6));
    }

    #[test]
    fn test_ordering_matches_integer_value() {
        let mut values = vec![poly("110"), poly("1"), poly(""), poly("1000"), poly("111")];
        values.sort();
        let ints: Vec<u64> = values.iter().map(|p| p.to_int().unwrap()).collect();
        assert_eq!(ints, vec![0, 1, 6, 7, 8]);
    }

    #[test]
    fn test_operations_do_not_mutate_operands() {
        let a = poly("1011");
        let b = poly("110");
        let _ = a.add(&b);
        let _ = a.multiply(&b);
        let _ = a.shift_left(3);
        let _ = a.shift_right(2);
        assert_eq!(a, poly("1011"));
        assert_eq!(b, poly("110"));
    }
}
