use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};

use crate::ValueConfig;

// === ApproxEq === //

/// Equality that honors the floating point tolerances of a [`ValueConfig`].
///
/// Floats are equal when they are `==` or when their absolute difference is within the
/// configured epsilon. `NaN` is never approximately equal to anything, itself included. Every
/// other type compares exactly.
pub trait ApproxEq {
	fn approx_eq(&self, other: &Self, config: &ValueConfig) -> bool;
}

macro_rules! impl_float_approx_eq {
	($($ty:ty => $field:ident),*$(,)?) => {$(
		impl ApproxEq for $ty {
			fn approx_eq(&self, other: &Self, config: &ValueConfig) -> bool {
				debug_assert!(
					config.validate().is_ok(),
					"invalid value configuration {:?}",
					config,
				);

				// (checked first so that infinities compare equal to themselves)
				*self == *other || (*self - *other).abs() <= config.$field
			}
		}
	)*};
}

macro_rules! impl_exact_approx_eq {
	($($ty:ty),*$(,)?) => {$(
		impl ApproxEq for $ty {
			fn approx_eq(&self, other: &Self, _config: &ValueConfig) -> bool {
				self == other
			}
		}
	)*};
}

impl_float_approx_eq!(f32 => f32_epsilon, f64 => f64_epsilon);

impl_exact_approx_eq!(
	bool, char, String, BigInt, BigUint, BigDecimal,
	i8, i16, i32, i64, i128, isize,
	u8, u16, u32, u64, u128, usize,
);

impl<T: ApproxEq> ApproxEq for Option<T> {
	fn approx_eq(&self, other: &Self, config: &ValueConfig) -> bool {
		match (self, other) {
			(None, None) => true,
			(Some(lhs), Some(rhs)) => lhs.approx_eq(rhs, config),
			_ => false,
		}
	}
}
