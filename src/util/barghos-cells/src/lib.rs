//! Small stateful cells: an optional value with an explicit presence flag ([`Nullable`]), a
//! deferred computation that caches its result ([`Lazy`] and friends), and fixed-width bit-flag
//! fields ([`FlagField`]).

mod error;
mod flag;
mod lazy;
mod nullable;
mod prim;

pub use error::*;
pub use flag::*;
pub use lazy::*;
pub use nullable::*;
pub use prim::*;

pub use barghos_traits::{ApproxEq, Sentinel, ValueConfig};
