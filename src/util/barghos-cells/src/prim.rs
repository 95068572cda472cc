use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{Lazy, Nullable};

// === Per-type aliases === //

macro_rules! prim_aliases {
	($($ty:ty => $nullable:ident, $lazy:ident;)*) => {$(
		pub type $nullable = Nullable<$ty>;
		pub type $lazy<F = fn() -> $ty> = Lazy<$ty, F>;
	)*};
}

prim_aliases! {
	bool => NullableBool, LazyBool;
	i8 => NullableI8, LazyI8;
	i16 => NullableI16, LazyI16;
	i32 => NullableI32, LazyI32;
	i64 => NullableI64, LazyI64;
	i128 => NullableI128, LazyI128;
	u8 => NullableU8, LazyU8;
	u16 => NullableU16, LazyU16;
	u32 => NullableU32, LazyU32;
	u64 => NullableU64, LazyU64;
	f32 => NullableF32, LazyF32;
	f64 => NullableF64, LazyF64;
	char => NullableChar, LazyChar;
	String => NullableString, LazyString;
	BigInt => NullableBigInt, LazyBigInt;
	BigDecimal => NullableBigDecimal, LazyBigDecimal;
}
