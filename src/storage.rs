//! The unsigned integer types that may back a [`FlagSet`](crate::FlagSet).

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

mod private {
    pub trait Sealed {}
}

/// An unsigned integer whose bits each record the presence of one flag.
///
/// This trait is sealed, and only implemented for `u8`, `u16`, `u32`, `u64`,
/// `u128` and `usize`. A signed type can not be used as storage.
pub trait Storage:
    private::Sealed
    + Copy
    + Eq
    + Hash
    + Default
    + fmt::Debug
    + fmt::Binary
    + fmt::LowerHex
    + fmt::UpperHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// No bits set.
    const ZERO: Self;

    /// Number of bits available for flags.
    const BITS: u32;
}

macro_rules! impl_storage {
    ($($ty:ty),*) => {
        $(
            impl private::Sealed for $ty {}

            impl Storage for $ty {
                const ZERO: Self = 0;
                const BITS: u32 = <$ty>::BITS;
            }
        )*
    };
}

impl_storage!(u8, u16, u32, u64, u128, usize);
