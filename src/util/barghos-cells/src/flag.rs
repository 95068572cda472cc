use std::fmt;

use bytemuck::{Pod, Zeroable};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::CellError;

// === FlagBits === //

/// An unsigned integer usable as the backing storage of a [`FlagField`].
pub trait FlagBits: 'static + PrimInt + Unsigned + Pod + Default + fmt::Binary {
	const WIDTH: u32;
}

macro_rules! impl_flag_bits {
	($($ty:ty),*$(,)?) => {$(
		impl FlagBits for $ty {
			const WIDTH: u32 = <$ty>::BITS;
		}
	)*};
}

impl_flag_bits!(u16, u32, u64);

fn check_index<B: FlagBits>(index: u32) -> Result<B, CellError> {
	if index < B::WIDTH {
		Ok(B::one() << index as usize)
	} else {
		Err(CellError::FlagIndexOutOfRange {
			index,
			width: B::WIDTH,
		})
	}
}

#[track_caller]
fn bit<B: FlagBits>(index: u32) -> B {
	match check_index(index) {
		Ok(bit) => bit,
		Err(err) => panic!("{err}"),
	}
}

// === FlagFieldRead / FlagFieldWrite === //

/// Read-only view of a fixed-width set of boolean flags.
///
/// Only [`flag`](Self::flag) is required; everything else is derived from it, so types that embed
/// a flag field can expose it by delegating a single accessor.
pub trait FlagFieldRead {
	type Bits: FlagBits;

	fn flag(&self) -> Self::Bits;

	/// Reads flag `index`.
	///
	/// # Panics
	///
	/// Panics if `index` is not less than the field's width.
	#[track_caller]
	fn get_at(&self, index: u32) -> bool {
		self.get(bit(index))
	}

	fn try_get_at(&self, index: u32) -> Result<bool, CellError> {
		Ok(self.get(check_index(index)?))
	}

	/// Returns `true` iff every bit of `mask` is set. An empty mask is trivially satisfied.
	fn get(&self, mask: Self::Bits) -> bool {
		self.flag() & mask == mask
	}

	/// Returns `true` iff at least one bit of `mask` is set.
	fn any(&self, mask: Self::Bits) -> bool {
		self.flag() & mask != Self::Bits::zero()
	}

	fn count(&self) -> u32 {
		self.flag().count_ones()
	}

	fn iter(&self) -> FlagIter<Self::Bits> {
		FlagIter {
			remaining: self.flag(),
		}
	}
}

/// Write access to a fixed-width set of boolean flags. Mutators return `self` for chaining.
pub trait FlagFieldWrite: FlagFieldRead {
	fn set_flag(&mut self, bits: Self::Bits) -> &mut Self;

	/// Sets or clears flag `index`.
	///
	/// # Panics
	///
	/// Panics if `index` is not less than the field's width.
	#[track_caller]
	fn set_at(&mut self, index: u32, value: bool) -> &mut Self {
		self.set_mask(bit(index), value)
	}

	fn try_set_at(&mut self, index: u32, value: bool) -> Result<&mut Self, CellError> {
		let mask = check_index(index)?;
		Ok(self.set_mask(mask, value))
	}

	/// Sets or clears exactly the bits in `mask`, leaving the others untouched.
	fn set_mask(&mut self, mask: Self::Bits, value: bool) -> &mut Self {
		let bits = if value {
			self.flag() | mask
		} else {
			self.flag() & !mask
		};

		self.set_flag(bits)
	}

	#[track_caller]
	fn toggle_at(&mut self, index: u32) -> &mut Self {
		let mask = bit(index);
		let bits = self.flag() ^ mask;
		self.set_flag(bits)
	}

	fn clear(&mut self) -> &mut Self {
		self.set_flag(Self::Bits::zero())
	}
}

// === FlagField === //

/// A fixed-width array of boolean flags packed into an unsigned integer. Flag `i` is bit `i`.
#[derive(Copy, Clone, Default, Hash, Eq, PartialEq)]
#[repr(transparent)]
pub struct FlagField<B> {
	bits: B,
}

pub type FlagField16 = FlagField<u16>;
pub type FlagField32 = FlagField<u32>;
pub type FlagField64 = FlagField<u64>;

// Safety: `FlagField` is a `repr(transparent)` wrapper around a `Pod` integer.
unsafe impl<B: FlagBits> Zeroable for FlagField<B> {}
unsafe impl<B: FlagBits> Pod for FlagField<B> {}

impl<B: FlagBits> FlagField<B> {
	pub const WIDTH: u32 = B::WIDTH;

	pub fn new() -> Self {
		Self { bits: B::zero() }
	}

	pub fn from_bits(bits: B) -> Self {
		Self { bits }
	}
}

impl<B: FlagBits> FlagFieldRead for FlagField<B> {
	type Bits = B;

	fn flag(&self) -> B {
		self.bits
	}
}

impl<B: FlagBits> FlagFieldWrite for FlagField<B> {
	fn set_flag(&mut self, bits: B) -> &mut Self {
		self.bits = bits;
		self
	}
}

impl<B: FlagBits> From<B> for FlagField<B> {
	fn from(bits: B) -> Self {
		Self::from_bits(bits)
	}
}

impl<B: FlagBits> fmt::Debug for FlagField<B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"FlagField{}({:#0width$b})",
			B::WIDTH,
			self.bits,
			width = B::WIDTH as usize + 2,
		)
	}
}

// === FlagIter === //

/// Iterates over the indices of set flags in ascending order.
#[derive(Debug, Clone)]
pub struct FlagIter<B> {
	remaining: B,
}

impl<B: FlagBits> Iterator for FlagIter<B> {
	type Item = u32;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == B::zero() {
			return None;
		}

		let index = self.remaining.trailing_zeros();
		self.remaining = self.remaining & (self.remaining - B::one());
		Some(index)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.remaining.count_ones() as usize;
		(len, Some(len))
	}
}

impl<B: FlagBits> ExactSizeIterator for FlagIter<B> {}

#[cfg(test)]
mod tests {
	use super::*;

	fn init_seed() {
		let seed = fastrand::u64(..);
		fastrand::seed(seed);
		println!("Set seed to {seed}.");
	}

	fn mirror_test<B: FlagBits>() {
		init_seed();

		let mut mirror = vec![false; B::WIDTH as usize];
		let mut field = FlagField::<B>::new();

		for step in 1..=2_000 {
			let index = fastrand::u32(0..B::WIDTH);
			let value = fastrand::bool();
			println!("Step {step}: setting flag {index} to {value}.");

			mirror[index as usize] = value;
			field.set_at(index, value);

			for (i, &expected) in mirror.iter().enumerate() {
				assert_eq!(field.get_at(i as u32), expected, "flag {i} of {field:?}");
			}

			let expected_set = mirror
				.iter()
				.enumerate()
				.filter(|(_, &v)| v)
				.map(|(i, _)| i as u32);

			assert!(field.iter().eq(expected_set));
		}
	}

	#[test]
	fn mirror_16() {
		mirror_test::<u16>();
	}

	#[test]
	fn mirror_32() {
		mirror_test::<u32>();
	}

	#[test]
	fn mirror_64() {
		mirror_test::<u64>();
	}

	#[test]
	fn set_at_preserves_other_bits() {
		for i in 0..FlagField32::WIDTH {
			let other = (i + 7) % FlagField32::WIDTH;
			let mut field = FlagField32::new();
			field.set_at(other, true);

			field.set_at(i, true);
			assert!(field.get_at(i));
			assert!(field.get_at(other));

			field.set_at(i, false);
			assert!(!field.get_at(i));
			assert!(field.get_at(other));
		}
	}

	#[test]
	fn highest_bit() {
		let mut field = FlagField64::new();
		field.set_at(63, true);

		assert_eq!(field.flag(), 1 << 63);
		assert_eq!(field.iter().collect::<Vec<_>>(), [63]);
	}

	#[test]
	fn masks() {
		let mut field = FlagField16::from_bits(0b1010);

		assert!(field.get(0b1010));
		assert!(field.get(0b0010));
		assert!(!field.get(0b0110));
		assert!(field.get(0));
		assert!(field.any(0b0110));
		assert!(!field.any(0b0101));

		field.set_mask(0b0101, true);
		assert_eq!(field.flag(), 0b1111);

		field.set_mask(0b1001, false);
		assert_eq!(field.flag(), 0b0110);
		assert_eq!(field.count(), 2);
	}

	#[test]
	fn chaining() {
		let mut field = FlagField32::new();
		field.set_at(0, true).set_at(3, true).toggle_at(4).set_mask(0b1, false);

		assert_eq!(field.flag(), 0b11000);
		assert_eq!(field.clear().flag(), 0);

		field.set_flag(u32::MAX);
		assert_eq!(field.count(), 32);
	}

	#[test]
	fn checked_access() {
		let mut field = FlagField16::new();

		assert_eq!(field.try_get_at(15), Ok(false));
		assert!(field.try_set_at(15, true).is_ok());
		assert_eq!(field.try_get_at(15), Ok(true));

		assert_eq!(
			field.try_get_at(16),
			Err(CellError::FlagIndexOutOfRange {
				index: 16,
				width: 16
			}),
		);
		assert!(field.try_set_at(100, true).is_err());
		assert_eq!(field.flag(), 1 << 15);
	}

	#[test]
	#[should_panic(expected = "flag index 32 is out of range for a 32-bit flag field")]
	fn out_of_range_panics() {
		FlagField32::new().set_at(32, true);
	}

	#[test]
	fn debug_and_pod() {
		let field = FlagField16::from(0b101);
		assert_eq!(format!("{field:?}"), "FlagField16(0b0000000000000101)");

		let raw: u16 = bytemuck::cast(field);
		assert_eq!(raw, 0b101);

		let fields = [FlagField32::from(1), FlagField32::from(2)];
		assert_eq!(bytemuck::cast_slice::<_, u32>(&fields[..]), &[1, 2]);
	}

	// A type embedding a flag field exposes it through the traits.
	#[derive(Debug, Default)]
	struct WindowHints {
		title: &'static str,
		flags: FlagField16,
	}

	impl FlagFieldRead for WindowHints {
		type Bits = u16;

		fn flag(&self) -> u16 {
			self.flags.flag()
		}
	}

	impl FlagFieldWrite for WindowHints {
		fn set_flag(&mut self, bits: u16) -> &mut Self {
			self.flags.set_flag(bits);
			self
		}
	}

	fn visible_flags(view: &impl FlagFieldRead) -> u32 {
		view.count()
	}

	#[test]
	fn embedded_field() {
		let mut hints = WindowHints {
			title: "main",
			..Default::default()
		};

		hints.set_at(1, true).set_at(2, true);
		assert_eq!(visible_flags(&hints), 2);
		assert_eq!(hints.flags.flag(), 0b110);
		assert_eq!(hints.title, "main");
	}
}
