use std::{fmt, hash, mem};

use barghos_traits::{ApproxEq, Sentinel, ValueConfig};
use derive_where::derive_where;

// === NullableLike === //

/// Read access to anything that either holds a `T` or is empty.
///
/// Implemented for [`Nullable`] and [`Option`] so that cells can be copied from either.
pub trait NullableLike<T> {
	fn as_ref_value(&self) -> Option<&T>;

	fn is_null(&self) -> bool {
		self.as_ref_value().is_none()
	}
}

impl<T> NullableLike<T> for Option<T> {
	fn as_ref_value(&self) -> Option<&T> {
		self.as_ref()
	}
}

impl<T> NullableLike<T> for Nullable<T> {
	fn as_ref_value(&self) -> Option<&T> {
		self.value.as_ref()
	}
}

// === Nullable === //

/// A cell that either holds a `T` or is empty ("null").
///
/// An empty cell never holds a stale value: [`set_empty`](Self::set_empty) drops the previous
/// contents, and reading an empty cell through [`value`](Self::value) yields the type's
/// [`Sentinel`].
///
/// Equality treats all empty cells as equal and never equates an empty cell with a present one,
/// even if the present one holds the sentinel. Hashing follows the same rule.
#[derive(Clone, Copy)]
#[derive_where(Default)]
pub struct Nullable<T> {
	value: Option<T>,
}

impl<T> Nullable<T> {
	pub const fn empty() -> Self {
		Self { value: None }
	}

	pub const fn of(value: T) -> Self {
		Self { value: Some(value) }
	}

	/// Builds a cell from an optional value. `None` yields an empty cell rather than a present
	/// cell holding an absent marker.
	pub const fn from_option(value: Option<T>) -> Self {
		Self { value }
	}

	pub const fn is_null(&self) -> bool {
		self.value.is_none()
	}

	pub const fn is_not_null(&self) -> bool {
		self.value.is_some()
	}

	pub const fn get(&self) -> Option<&T> {
		self.value.as_ref()
	}

	/// Views the cell as an [`Option`], with `None` standing in for empty.
	pub const fn as_option(&self) -> Option<&T> {
		self.value.as_ref()
	}

	pub fn get_mut(&mut self) -> Option<&mut T> {
		self.value.as_mut()
	}

	pub fn value_or(&self, other: T) -> T
	where
		T: Clone,
	{
		match &self.value {
			Some(value) => value.clone(),
			None => other,
		}
	}

	pub fn value_or_else(&self, f: impl FnOnce() -> T) -> T
	where
		T: Clone,
	{
		match &self.value {
			Some(value) => value.clone(),
			None => f(),
		}
	}

	pub fn set_value(&mut self, value: T) -> &mut Self {
		self.value = Some(value);
		self
	}

	/// Sets the cell from an optional value, coalescing `None` to empty.
	pub fn set_option(&mut self, value: Option<T>) -> &mut Self {
		self.value = value;
		self
	}

	pub fn set_empty(&mut self) -> &mut Self {
		self.value = None;
		self
	}

	/// Copies the presence and value of `other` into this cell.
	pub fn set(&mut self, other: &Self) -> &mut Self
	where
		T: Clone,
	{
		self.value.clone_from(&other.value);
		self
	}

	pub fn set_from(&mut self, other: &impl NullableLike<T>) -> &mut Self
	where
		T: Clone,
	{
		self.value = other.as_ref_value().cloned();
		self
	}

	pub fn take(&mut self) -> Option<T> {
		self.value.take()
	}

	/// Stores `value` and returns the previous state of the cell.
	pub fn replace(&mut self, value: T) -> Self {
		Self::from_option(mem::replace(&mut self.value, Some(value)))
	}

	pub fn into_option(self) -> Option<T> {
		self.value
	}

	pub fn map<V>(self, f: impl FnOnce(T) -> V) -> Nullable<V> {
		Nullable::from_option(self.value.map(f))
	}

	/// Returns `true` only if the cell is present and holds a value equal to `other`.
	pub fn eq_value(&self, other: &T) -> bool
	where
		T: PartialEq,
	{
		self.value.as_ref() == Some(other)
	}

	/// Compares against an optional value, where `None` plays the role of null: an empty cell
	/// equals `None`.
	pub fn eq_option(&self, other: Option<&T>) -> bool
	where
		T: PartialEq,
	{
		self.value.as_ref() == other
	}

	pub fn approx_eq(&self, other: &Self, config: &ValueConfig) -> bool
	where
		T: ApproxEq,
	{
		self.value.approx_eq(&other.value, config)
	}
}

impl<T: Sentinel + Clone> Nullable<T> {
	/// Returns the held value, or the type's sentinel if the cell is empty.
	pub fn value(&self) -> T {
		self.value_or_else(T::sentinel)
	}
}

impl<T> From<Option<T>> for Nullable<T> {
	fn from(value: Option<T>) -> Self {
		Self::from_option(value)
	}
}

impl<T> From<Nullable<T>> for Option<T> {
	fn from(value: Nullable<T>) -> Self {
		value.value
	}
}

impl<T: PartialEq> PartialEq for Nullable<T> {
	fn eq(&self, other: &Self) -> bool {
		match (&self.value, &other.value) {
			(None, None) => true,
			(Some(lhs), Some(rhs)) => lhs == rhs,
			_ => false,
		}
	}
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: PartialEq> PartialEq<Option<T>> for Nullable<T> {
	fn eq(&self, other: &Option<T>) -> bool {
		self.eq_option(other.as_ref())
	}
}

impl<T: hash::Hash> hash::Hash for Nullable<T> {
	fn hash<H: hash::Hasher>(&self, state: &mut H) {
		self.is_not_null().hash(state);

		if let Some(value) = &self.value {
			value.hash(state);
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Nullable<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.value {
			Some(value) => f.debug_tuple("Nullable").field(value).finish(),
			None => f.write_str("Nullable(null)"),
		}
	}
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.value {
			Some(value) => value.fmt(f),
			None => f.write_str("null"),
		}
	}
}
