//! Flag enumerations: the domain a [`FlagSet`](crate::FlagSet) is typed over.

use crate::storage::Storage;

/// A closed enumeration of named flags.
///
/// Each flag should be a distinct power of two (or zero, for a "none"
/// flag) so that combining them with `|` behaves as a set union. This is not
/// checked, and two flags sharing a bit will simply alias each other inside a
/// set.
///
/// Rather than implementing this by hand, use [`impl_flags!`](crate::impl_flags)
/// on a fieldless `#[repr]` enum.
pub trait Flags: Copy {
    /// Default storage for sets of these flags, the unsigned counterpart of
    /// the enumeration's representation.
    type Storage: Storage;

    /// The bit (or bits) this flag occupies.
    fn bits(self) -> Self::Storage;
}

/// Implement [`Flags`] for one or more fieldless enums, naming the unsigned
/// storage each is held in.
///
/// As well as the trait, this implements `|` between two flags, and between a
/// flag and a set, so that flag literals combine directly into a
/// [`FlagSet`](crate::FlagSet).
///
/// # Examples
/// ```
/// use flagset::{impl_flags, FlagSet};
///
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Access {
///     Read = 1,
///     Write = 2,
///     Exec = 4,
/// }
///
/// impl_flags!(Access => u8);
///
/// let rw: FlagSet<Access> = Access::Read | Access::Write;
/// assert_eq!(rw.bits(), 3);
/// assert!(!rw.contains(Access::Exec));
/// ```
///
/// The storage must be at least as wide as the enum's representation, or a
/// high flag would be cut off:
///
/// ```compile_fail
/// use flagset::impl_flags;
///
/// #[derive(Clone, Copy)]
/// #[repr(u16)]
/// enum Wide {
///     Low = 1,
///     High = 0x100,
/// }
///
/// impl_flags!(Wide => u8);
/// ```
#[macro_export]
macro_rules! impl_flags {
    ($($name:ty => $storage:ty),+ $(,)?) => {
        $(
            const _: () = ::core::assert!(
                ::core::mem::size_of::<$name>() * 8
                    <= <$storage as $crate::Storage>::BITS as usize,
                "flag storage is narrower than the enum representation",
            );

            impl $crate::Flags for $name {
                type Storage = $storage;

                #[inline]
                fn bits(self) -> $storage {
                    self as $storage
                }
            }

            impl ::core::ops::BitOr for $name {
                type Output = $crate::FlagSet<$name>;

                #[inline]
                fn bitor(self, rhs: $name) -> $crate::FlagSet<$name> {
                    let lhs: $crate::FlagSet<$name> = self.into();
                    lhs | rhs
                }
            }

            impl ::core::ops::BitOr<$crate::FlagSet<$name>> for $name {
                type Output = $crate::FlagSet<$name>;

                #[inline]
                fn bitor(self, rhs: $crate::FlagSet<$name>) -> $crate::FlagSet<$name> {
                    rhs | self
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::Flags;
    use crate::FlagSet;

    #[derive(Clone, Copy, Debug)]
    #[repr(u8)]
    enum Small {
        None = 0,
        A = 1,
        B = 2,
        High = 128,
    }

    #[derive(Clone, Copy, Debug)]
    #[repr(i32)]
    enum Signed {
        Low = 1,
        Top = i32::MIN,
    }

    #[derive(Clone, Copy, Debug)]
    #[repr(u16)]
    enum Ninth {
        Low = 1,
        High = 0x100,
    }

    impl_flags!(Small => u8, Signed => u32, Ninth => u32);

    #[test]
    fn test_flags_bits() {
        assert_eq!(Small::None.bits(), 0);
        assert_eq!(Small::A.bits(), 1);
        assert_eq!(Small::B.bits(), 2);
        assert_eq!(Small::High.bits(), 0x80);
    }

    #[test]
    fn test_flags_signed_repr() {
        // The sign bit of the representation lands in the top storage bit.
        assert_eq!(Signed::Low.bits(), 1);
        assert_eq!(Signed::Top.bits(), 0x8000_0000);
    }

    #[test]
    fn test_flags_wider_storage() {
        // A storage wider than the representation keeps every flag.
        assert_eq!(Ninth::High.bits(), 0x100u32);
        let high = FlagSet::from(Ninth::High);
        assert!(!high.is_empty());
        assert!(!FlagSet::from(Ninth::Low).contains(high));
        assert_eq!((Ninth::Low | Ninth::High).bits(), 0x101);
    }

    #[test]
    fn test_flags_bitor_1() {
        let set = Small::A | Small::B;
        assert_eq!(set.bits(), 3);

        let set = Small::High | set;
        assert_eq!(set.bits(), 0x83);

        let set = Small::None | Small::None;
        assert!(set.is_empty());
    }

    #[test]
    fn test_flags_bitor_2() {
        let set: FlagSet<Signed> = Signed::Top | Signed::Low;
        assert_eq!(set.bits(), 0x8000_0001);
    }
}
