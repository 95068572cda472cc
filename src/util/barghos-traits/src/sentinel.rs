use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

// === Sentinel === //

/// A type with a designated "empty" representation.
///
/// Cells substitute this value when asked for the contents of an empty slot, so an empty
/// `Nullable<i32>` reads as `0`, an empty `Nullable<bool>` reads as `false`, and so on. The
/// sentinel is a plain value: a present cell holding the sentinel is still present.
pub trait Sentinel: Sized {
	fn sentinel() -> Self;

	fn is_sentinel(&self) -> bool
	where
		Self: PartialEq,
	{
		*self == Self::sentinel()
	}
}

macro_rules! impl_sentinel {
	($value:expr => $($ty:ty),*$(,)?) => {$(
		impl Sentinel for $ty {
			fn sentinel() -> Self {
				$value
			}
		}
	)*};
}

impl_sentinel!(false => bool);
impl_sentinel!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_sentinel!(0.0 => f32, f64);
impl_sentinel!('\0' => char);
impl_sentinel!(String::new() => String);
impl_sentinel!(Zero::zero() => BigInt, BigUint, BigDecimal);
