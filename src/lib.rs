//! Type-safe sets of bit flags.
//!
//! A [`FlagSet`] holds any subset of the flags declared by one enumeration,
//! stored as the bits of a single unsigned integer. It is exactly as large as
//! that integer and is `Copy`, but unlike a bare integer it can only be
//! combined with flags and sets of the same enumeration.
//!
//! # Examples
//! ```
//! use flagset::{impl_flags, FlagSet};
//!
//! #[derive(Clone, Copy)]
//! #[repr(u8)]
//! enum Opt {
//!     A = 1,
//!     B = 2,
//!     C = 4,
//! }
//!
//! impl_flags!(Opt => u8);
//!
//! let set = FlagSet::from(Opt::A) | Opt::C;
//! assert_eq!(set.bits(), 5);
//! assert!(set.contains(Opt::A));
//! assert!(!set.contains(Opt::B));
//!
//! let set = (Opt::A | Opt::B) - Opt::B;
//! assert_eq!(set.bits(), 1);
//! ```
//!
//! Sets built from raw storage are not checked against the declared flags:
//! ```
//! # use flagset::{impl_flags, FlagSet};
//! # #[derive(Clone, Copy)]
//! # #[repr(u8)]
//! # enum Opt { A = 1, B = 2, C = 4 }
//! # impl_flags!(Opt => u8);
//! let set: FlagSet<Opt> = FlagSet::from_bits(9);
//! assert!(set.contains(Opt::A));
//! ```

#![warn(missing_docs)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_derive;

/// Set difference: the members of `self` that are not in `rhs`.
pub trait AndNot<RHS = Self> {
    /// The resulting type after the operation.
    type Output;
    /// Perform the exclusion.
    fn andnot(self, rhs: RHS) -> Self::Output;
}

mod flag_set;
mod flags;
mod storage;

pub use crate::flag_set::{FlagSet, IntoFlagSet};
pub use crate::flags::Flags;
pub use crate::storage::Storage;
