//! The set type and its algebra.
//!
//! Every operation here is a single bitwise operation on the storage integer.
//! None of them can fail, and none of them validate that the stored bits
//! belong to declared flags.

use crate::flags::Flags;
use crate::storage::Storage;
use crate::AndNot;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

/// A set of the flags of `E`, held as the bits of an `S`.
///
/// `S` defaults to the storage named by `E`'s [`Flags`] implementation. A
/// wider unsigned type may be given instead, in which case flags are widened
/// losslessly on the way in.
///
/// The set has the same layout as a bare `S`. Values are only ever combined
/// with flags and sets of the same `E` and `S`:
///
/// ```compile_fail
/// use flagset::{impl_flags, FlagSet};
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Fruit { Apple = 1 }
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Colour { Red = 1 }
/// impl_flags!(Fruit => u8, Colour => u8);
///
/// let set = FlagSet::from(Fruit::Apple) | FlagSet::from(Colour::Red);
/// ```
///
/// Nor can a raw integer become a set without saying so:
///
/// ```compile_fail
/// use flagset::{impl_flags, FlagSet};
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Fruit { Apple = 1 }
/// impl_flags!(Fruit => u8);
///
/// let set: FlagSet<Fruit> = 1u8.into();
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "S: serde::Serialize",
            deserialize = "S: serde::Deserialize<'de>"
        )
    )
)]
#[repr(transparent)]
pub struct FlagSet<E: Flags, S: Storage = <E as Flags>::Storage> {
    storage: S,
    #[cfg_attr(feature = "serde", serde(skip))]
    flags: PhantomData<E>,
}

/// Anything that stands for a set of the flags of `E`: a single flag, or a
/// set.
///
/// The operators and queries of [`FlagSet`] take their argument through this
/// trait, so a bare flag can be used wherever a set is expected.
pub trait IntoFlagSet<E: Flags, S: Storage> {
    /// Convert into a set.
    fn into_flag_set(self) -> FlagSet<E, S>;
}

impl<E, S> IntoFlagSet<E, S> for E
where
    E: Flags,
    S: Storage + From<E::Storage>,
{
    #[inline(always)]
    fn into_flag_set(self) -> FlagSet<E, S> {
        FlagSet::from_flag(self)
    }
}

impl<E: Flags, S: Storage> IntoFlagSet<E, S> for FlagSet<E, S> {
    #[inline(always)]
    fn into_flag_set(self) -> FlagSet<E, S> {
        self
    }
}

impl<E: Flags, S: Storage> FlagSet<E, S> {
    /// The empty set.
    pub const EMPTY: Self = FlagSet {
        storage: S::ZERO,
        flags: PhantomData,
    };

    /// Construct a new, empty set.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Construct a set from raw storage.
    ///
    /// Bits that do not correspond to any flag of `E` are kept as they are.
    pub const fn from_bits(storage: S) -> Self {
        FlagSet {
            storage,
            flags: PhantomData,
        }
    }

    /// Construct a set containing only `flag`.
    ///
    /// This is what `From<E>` does for the default storage, and also works
    /// when `S` is wider than `E`'s own storage.
    ///
    /// # Examples
    /// ```
    /// use flagset::{impl_flags, FlagSet};
    ///
    /// #[derive(Clone, Copy)]
    /// #[repr(u8)]
    /// enum Opt { A = 1, B = 2 }
    /// impl_flags!(Opt => u8);
    ///
    /// let set = FlagSet::<Opt, u64>::from_flag(Opt::B) | Opt::A;
    /// assert_eq!(set.bits(), 3u64);
    /// ```
    #[inline(always)]
    pub fn from_flag(flag: E) -> Self
    where
        S: From<E::Storage>,
    {
        Self::from_bits(S::from(flag.bits()))
    }

    /// The raw storage of this set.
    pub const fn bits(&self) -> S {
        self.storage
    }

    /// Show if this set contains no flags.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage == S::ZERO
    }

    /// Returns `true` if every flag of `other` is also in this set.
    ///
    /// An empty `other` is contained in every set, including the empty set.
    #[inline(always)]
    pub fn contains<T: IntoFlagSet<E, S>>(&self, other: T) -> bool {
        let other = other.into_flag_set();
        (self.storage & other.storage) == other.storage
    }

    /// Returns `true` if this set and `other` have at least one flag in
    /// common.
    #[inline(always)]
    pub fn intersects<T: IntoFlagSet<E, S>>(&self, other: T) -> bool {
        (self.storage & other.into_flag_set().storage) != S::ZERO
    }

    /// Add the flags of `other` to this set. Equivalent to `|=`.
    #[inline(always)]
    pub fn insert<T: IntoFlagSet<E, S>>(&mut self, other: T) -> &mut Self {
        *self |= other;
        self
    }

    /// Keep only the flags that are also in `other`. Equivalent to `&=`.
    #[inline(always)]
    pub fn retain<T: IntoFlagSet<E, S>>(&mut self, other: T) -> &mut Self {
        *self &= other;
        self
    }

    /// Remove the flags of `other` from this set. Equivalent to `-=`.
    #[inline(always)]
    pub fn remove<T: IntoFlagSet<E, S>>(&mut self, other: T) -> &mut Self {
        *self -= other;
        self
    }

    /// Flip the flags of `other` in this set. Equivalent to `^=`.
    #[inline(always)]
    pub fn toggle<T: IntoFlagSet<E, S>>(&mut self, other: T) -> &mut Self {
        *self ^= other;
        self
    }
}

impl<E: Flags, S: Storage> Clone for FlagSet<E, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Flags, S: Storage> Copy for FlagSet<E, S> {}

impl<E: Flags, S: Storage> Default for FlagSet<E, S> {
    /// Construct a new, empty set.
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<E: Flags, S: Storage> PartialEq for FlagSet<E, S> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<E: Flags, S: Storage> Eq for FlagSet<E, S> {}

impl<E: Flags, S: Storage> Hash for FlagSet<E, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state)
    }
}

impl<E: Flags, S: Storage> fmt::Debug for FlagSet<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#x})", self.storage)
    }
}

impl<E: Flags, S: Storage> fmt::Binary for FlagSet<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.storage, f)
    }
}

impl<E: Flags, S: Storage> fmt::LowerHex for FlagSet<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.storage, f)
    }
}

impl<E: Flags, S: Storage> fmt::UpperHex for FlagSet<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.storage, f)
    }
}

impl<E: Flags> From<E> for FlagSet<E> {
    /// Construct a set containing only `flag`.
    #[inline(always)]
    fn from(flag: E) -> Self {
        FlagSet::from_flag(flag)
    }
}

impl<E: Flags> From<Option<E>> for FlagSet<E> {
    /// `None` is the empty set, `Some(flag)` the set of just that flag.
    ///
    /// # Examples
    /// ```
    /// # use flagset::{impl_flags, FlagSet};
    /// # #[derive(Clone, Copy)]
    /// # #[repr(u8)]
    /// # enum Opt { A = 1 }
    /// # impl_flags!(Opt => u8);
    /// let set: FlagSet<Opt> = None.into();
    /// assert!(set.is_empty());
    /// assert_eq!(FlagSet::from(Some(Opt::A)), FlagSet::from(Opt::A));
    /// ```
    fn from(flag: Option<E>) -> Self {
        match flag {
            Some(flag) => FlagSet::from_flag(flag),
            None => FlagSet::EMPTY,
        }
    }
}

impl<E: Flags, S: Storage> From<FlagSet<E, S>> for bool {
    /// `true` if the set is non-empty.
    #[inline(always)]
    fn from(set: FlagSet<E, S>) -> bool {
        !set.is_empty()
    }
}

impl<E, S, R> BitOr<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    type Output = Self;

    /// Produce the union of two sets.
    #[inline(always)]
    fn bitor(self, rhs: R) -> Self {
        Self::from_bits(self.storage | rhs.into_flag_set().storage)
    }
}

impl<E, S, R> BitOrAssign<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: R) {
        self.storage = self.storage | rhs.into_flag_set().storage;
    }
}

impl<E, S, R> BitAnd<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    type Output = Self;

    /// Produce the intersection of two sets.
    #[inline(always)]
    fn bitand(self, rhs: R) -> Self {
        Self::from_bits(self.storage & rhs.into_flag_set().storage)
    }
}

impl<E, S, R> BitAndAssign<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: R) {
        self.storage = self.storage & rhs.into_flag_set().storage;
    }
}

impl<E, S, R> BitXor<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    type Output = Self;

    /// Produce the flags that are in exactly one of the two sets.
    #[inline(always)]
    fn bitxor(self, rhs: R) -> Self {
        Self::from_bits(self.storage ^ rhs.into_flag_set().storage)
    }
}

impl<E, S, R> BitXorAssign<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: R) {
        self.storage = self.storage ^ rhs.into_flag_set().storage;
    }
}

impl<E: Flags, S: Storage> Not for FlagSet<E, S> {
    type Output = Self;

    /// Produce the complement of a set. Every bit of the storage is
    /// flipped, not only those of declared flags.
    #[inline(always)]
    fn not(self) -> Self {
        Self::from_bits(!self.storage)
    }
}

impl<E, S, R> Sub<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    type Output = Self;

    /// Produce the difference of two sets: the flags of the left that are
    /// not in the right.
    #[inline(always)]
    fn sub(self, rhs: R) -> Self {
        Self::from_bits(self.storage & !rhs.into_flag_set().storage)
    }
}

impl<E, S, R> SubAssign<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    #[inline(always)]
    fn sub_assign(&mut self, rhs: R) {
        self.storage = self.storage & !rhs.into_flag_set().storage;
    }
}

impl<E, S, R> AndNot<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    type Output = Self;

    /// Clear the bits of `rhs` from this set's storage, `a & !b`. Spelled
    /// `-` as an operator.
    ///
    /// # Examples
    /// ```
    /// use flagset::{impl_flags, AndNot, FlagSet};
    ///
    /// #[derive(Clone, Copy)]
    /// #[repr(u8)]
    /// enum Opt { A = 1, B = 2, C = 4 }
    /// impl_flags!(Opt => u8);
    ///
    /// let set = (Opt::A | Opt::B | Opt::C).andnot(Opt::B);
    /// assert_eq!(set, Opt::A | Opt::C);
    /// ```
    #[inline(always)]
    fn andnot(self, rhs: R) -> Self {
        self - rhs
    }
}

impl<E, S, R> FromIterator<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    /// Build the union of every flag or set yielded by `iter`.
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl<E, S, R> Extend<R> for FlagSet<E, S>
where
    E: Flags,
    S: Storage,
    R: IntoFlagSet<E, S>,
{
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        iter.into_iter().for_each(|i| *self |= i);
    }
}
