use std::{any::type_name, marker::PhantomData};

use barghos_traits::Sentinel;
use derive_where::derive_where;

// === Lazy === //

/// A value computed on first read and cached until it is cleared or updated.
///
/// The cell is either empty or computed. Reading an empty cell runs the producer once and caches
/// the result; reading a computed cell never runs the producer. [`clear`](Self::clear) drops the
/// cached value and [`update`](Self::update) forces a recomputation.
///
/// All mutating accessors take `&mut self`, so two readers can never race on the first
/// computation. To share a cell between threads, put it behind a `Mutex` and hold the lock for
/// the whole read.
///
/// If the producer panics, the cell is left empty.
#[derive_where(Debug; T)]
#[derive(Clone)]
pub struct Lazy<T, F = fn() -> T> {
	#[derive_where(skip(Debug))]
	producer: F,
	cached: Option<T>,
}

impl<T, F> Lazy<T, F> {
	pub const fn new(producer: F) -> Self {
		Self {
			producer,
			cached: None,
		}
	}

	/// Checks whether a computed value is cached. Never runs the producer.
	pub const fn has_value(&self) -> bool {
		self.cached.is_some()
	}

	/// Peeks at the cached value without computing it.
	pub const fn get(&self) -> Option<&T> {
		self.cached.as_ref()
	}

	/// Peeks at the cached value, substituting the type's sentinel if nothing is cached.
	pub fn cached_or_sentinel(&self) -> T
	where
		T: Sentinel + Clone,
	{
		match &self.cached {
			Some(value) => value.clone(),
			None => T::sentinel(),
		}
	}

	pub fn clear(&mut self) {
		if self.cached.take().is_some() {
			log::trace!("Cleared lazy value of type {}.", type_name::<T>());
		}
	}

	/// Removes the cached value, leaving the cell empty.
	pub fn take(&mut self) -> Option<T> {
		self.cached.take()
	}
}

impl<T, F: FnMut() -> T> Lazy<T, F> {
	pub fn value(&mut self) -> &T {
		self.value_mut()
	}

	pub fn value_mut(&mut self) -> &mut T {
		let producer = &mut self.producer;

		self.cached.get_or_insert_with(|| {
			log::trace!("Computing lazy value of type {}.", type_name::<T>());
			producer()
		})
	}

	/// Runs the producer even if a value is already cached, replacing it.
	pub fn update(&mut self) -> &T {
		// Drop the old value first so a panicking producer cannot leave it behind.
		self.cached = None;

		log::trace!("Forcing update of lazy value of type {}.", type_name::<T>());
		self.cached.insert((self.producer)())
	}

	pub fn into_value(mut self) -> T {
		match self.cached {
			Some(value) => value,
			None => (self.producer)(),
		}
	}
}

impl<T: Default> Default for Lazy<T> {
	fn default() -> Self {
		Self::new(T::default)
	}
}

// === TryLazy === //

/// A [`Lazy`] whose producer can fail.
///
/// A failed computation leaves the cell empty and hands the error to the caller unchanged. There
/// is no retry: the next read runs the producer again.
#[derive_where(Debug; T)]
pub struct TryLazy<T, E, F = fn() -> Result<T, E>> {
	#[derive_where(skip(Debug))]
	producer: F,
	cached: Option<T>,
	#[derive_where(skip(Debug))]
	_error: PhantomData<fn() -> E>,
}

impl<T, E, F> TryLazy<T, E, F> {
	pub const fn new(producer: F) -> Self {
		Self {
			producer,
			cached: None,
			_error: PhantomData,
		}
	}

	pub const fn has_value(&self) -> bool {
		self.cached.is_some()
	}

	pub const fn get(&self) -> Option<&T> {
		self.cached.as_ref()
	}

	pub fn clear(&mut self) {
		self.cached = None;
	}

	pub fn take(&mut self) -> Option<T> {
		self.cached.take()
	}
}

impl<T, E, F: FnMut() -> Result<T, E>> TryLazy<T, E, F> {
	pub fn value(&mut self) -> Result<&T, E> {
		let value = match self.cached.take() {
			Some(value) => value,
			None => self.produce()?,
		};

		Ok(self.cached.insert(value))
	}

	pub fn update(&mut self) -> Result<&T, E> {
		self.cached = None;

		let value = self.produce()?;
		Ok(self.cached.insert(value))
	}

	fn produce(&mut self) -> Result<T, E> {
		log::trace!("Computing fallible lazy value of type {}.", type_name::<T>());

		let result = (self.producer)();
		if result.is_err() {
			log::debug!(
				"Producer for lazy value of type {} failed; the cell stays empty.",
				type_name::<T>(),
			);
		}

		result
	}
}

// === UpdatableLazy === //

pub type BoxedProducer<'a, T> = Box<dyn FnMut() -> T + 'a>;

/// A [`Lazy`] whose producer can be swapped out after construction.
#[derive(Debug)]
pub struct UpdatableLazy<'a, T> {
	inner: Lazy<T, BoxedProducer<'a, T>>,
}

impl<'a, T> UpdatableLazy<'a, T> {
	pub fn new(producer: impl FnMut() -> T + 'a) -> Self {
		let producer: BoxedProducer<'a, T> = Box::new(producer);

		Self {
			inner: Lazy::new(producer),
		}
	}

	/// Installs a new producer. Any cached value came from the old producer and is dropped.
	pub fn set_producer(&mut self, producer: impl FnMut() -> T + 'a) {
		*self = Self::new(producer);
	}

	pub fn has_value(&self) -> bool {
		self.inner.has_value()
	}

	pub fn get(&self) -> Option<&T> {
		self.inner.get()
	}

	pub fn value(&mut self) -> &T {
		self.inner.value()
	}

	pub fn value_mut(&mut self) -> &mut T {
		self.inner.value_mut()
	}

	pub fn update(&mut self) -> &T {
		self.inner.update()
	}

	pub fn clear(&mut self) {
		self.inner.clear();
	}
}
