use std::{
	hash::{self, BuildHasher, Hasher},
	marker::PhantomData,
};

use derive_where::derive_where;
use rustc_hash::FxHasher;

// === ConstBuildHasherDefault === //

/// A `BuildHasherDefault` that can be built in `const` context, so cell-keyed maps (for example a
/// `FxHashMap<NullableString, _>` cache) can be created with `HashMap::with_hasher` in a `static`.
#[derive_where(Debug, Copy, Clone, Default)]
pub struct ConstBuildHasherDefault<T> {
	_ty: PhantomData<fn() -> T>,
}

impl<T> ConstBuildHasherDefault<T> {
	pub const fn new() -> Self {
		Self { _ty: PhantomData }
	}
}

impl<T: Default + Hasher> BuildHasher for ConstBuildHasherDefault<T> {
	type Hasher = T;

	fn build_hasher(&self) -> Self::Hasher {
		T::default()
	}
}

// === Hash Maps === //

// Maps and sets for consumers that key on cells: `Nullable<T>` hashes consistently with its
// equality, so empty and present cells land in distinct buckets.

pub type FxBuildHasher = ConstBuildHasherDefault<FxHasher>;
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
pub type FxHashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Hashes a single value with the workspace's deterministic hasher.
pub fn hash_one<H: ?Sized + hash::Hash>(target: &H) -> u64 {
	let mut hasher = FxBuildHasher::new().build_hasher();
	target.hash(&mut hasher);
	hasher.finish()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hash_one_is_deterministic() {
		assert_eq!(hash_one("barghos"), hash_one("barghos"));
		assert_eq!(hash_one(&Some(3u8)), hash_one(&Some(3u8)));
		assert_ne!(hash_one(&Some(0u8)), hash_one(&None::<u8>));
	}

	#[test]
	fn const_constructible_map() {
		static EMPTY: FxHashSet<u32> = FxHashSet::with_hasher(FxBuildHasher::new());

		assert!(EMPTY.is_empty());
		assert_eq!(hash_one(&7u32), FxBuildHasher::new().hash_one(7u32));
	}

	#[test]
	fn maps_use_fx_hasher() {
		let mut map = FxHashMap::default();
		map.insert("a", 1);
		map.insert("b", 2);

		assert_eq!(map.get("a"), Some(&1));
		assert_eq!(map.len(), 2);
	}
}
