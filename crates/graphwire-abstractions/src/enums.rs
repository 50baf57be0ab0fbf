// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Enum codec: wire strings to typed constants and back.
//!
//! Two shapes are supported, each generated by a macro:
//! - [`wire_enum!`](crate::wire_enum): single-valued enums whose integer value
//!   indexes a fixed string table. Reordering the table changes the wire form.
//! - [`flag_enum!`](crate::flag_enum): independent power-of-two flags written as
//!   a comma-joined list of set names in declared order.
//!
//! Parsing never errors: an unrecognized string yields `None`, and callers
//! leave the property unset.

use std::fmt::Debug;

/// Common surface of generated enums, used by stores, parse nodes and writers.
pub trait WireEnum: Copy + Eq + Debug + Send + Sync + 'static {
    /// Schema name, e.g. `scheduleChangeState`.
    const TYPE_NAME: &'static str;

    /// Canonical wire string.
    fn to_wire(self) -> String;

    /// Parse a wire string; `None` when it is not recognized.
    fn parse_wire(value: &str) -> Option<Self>;

    /// Integer representation kept in the backing store.
    fn to_bits(self) -> u64;

    /// Rebuild from the integer representation; `None` when out of range.
    fn from_bits(bits: u64) -> Option<Self>;
}

/// Declare a single-valued wire enum.
///
/// Variants are numbered from zero in declaration order and that number
/// indexes `NAMES`. Evolvable enums declare `UnknownFutureValue` like any
/// other variant, and may declare members after it.
///
/// ```
/// graphwire_abstractions::wire_enum! {
///     /// Traffic light.
///     pub enum Light: "light" {
///         /// Stop.
///         Red = "red",
///         /// Go.
///         Green = "green",
///     }
/// }
/// assert_eq!(Light::Green.as_str(), "green");
/// assert_eq!(Light::parse("amber"), None);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $type_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Wire strings indexed by integer value.
            pub const NAMES: &'static [&'static str] = &[$($wire),+];

            /// Every constant in integer order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical wire string.
            pub fn as_str(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            /// Case-sensitive match against the wire strings.
            pub fn parse(value: &str) -> ::core::option::Option<Self> {
                Self::ALL.iter().copied().find(|candidate| candidate.as_str() == value)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::WireEnum for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn to_wire(self) -> ::std::string::String {
                ::std::borrow::ToOwned::to_owned(self.as_str())
            }

            fn parse_wire(value: &str) -> ::core::option::Option<Self> {
                Self::parse(value)
            }

            fn to_bits(self) -> u64 {
                self as u64
            }

            fn from_bits(bits: u64) -> ::core::option::Option<Self> {
                usize::try_from(bits).ok().and_then(|index| Self::ALL.get(index).copied())
            }
        }
    };
}

/// Declare a flag enum as a bit-set newtype.
///
/// Each flag names its bit value and wire string. `to_wire_string` walks the
/// flags in declared order, so declare them by ascending bit.
///
/// ```
/// graphwire_abstractions::flag_enum! {
///     /// Pizza toppings.
///     pub struct Toppings: "toppings" {
///         /// Cheese.
///         const CHEESE = 1 => "cheese";
///         /// Basil.
///         const BASIL = 2 => "basil";
///         /// Olives.
///         const OLIVES = 4 => "olives";
///     }
/// }
/// let parsed = Toppings::parse("cheese,olives").unwrap();
/// assert_eq!(parsed, Toppings::CHEESE | Toppings::OLIVES);
/// assert_eq!(parsed.to_wire_string(), "cheese,olives");
/// assert_eq!(Toppings::parse("cheese,anchovy"), None);
/// ```
#[macro_export]
macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $type_name:literal {
            $( $(#[$fmeta:meta])* const $flag:ident = $bits:literal => $wire:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(u64);

        impl $name {
            $( $(#[$fmeta])* pub const $flag: Self = Self($bits); )+

            /// Declared flags with their wire strings, in declared order.
            pub const FLAGS: &'static [(Self, &'static str)] = &[$((Self::$flag, $wire)),+];

            const KNOWN_BITS: u64 = 0 $(| $bits)+;

            /// No flags set.
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Raw bits.
            pub const fn bits(self) -> u64 {
                self.0
            }

            /// Rebuild from raw bits; `None` if any bit is undeclared.
            pub const fn from_bits(bits: u64) -> ::core::option::Option<Self> {
                if bits & !Self::KNOWN_BITS == 0 {
                    ::core::option::Option::Some(Self(bits))
                } else {
                    ::core::option::Option::None
                }
            }

            /// `true` when every bit of `other` is set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// `true` when no bit is set.
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Comma-joined names of the set flags, in declared order.
            pub fn to_wire_string(self) -> ::std::string::String {
                Self::FLAGS
                    .iter()
                    .filter(|(flag, _)| !flag.is_empty() && self.contains(*flag))
                    .map(|(_, wire)| *wire)
                    .collect::<::std::vec::Vec<_>>()
                    .join(",")
            }

            /// Split on `,` and OR every token's bit; `None` if any token is unknown.
            /// The empty string is the empty set.
            pub fn parse(value: &str) -> ::core::option::Option<Self> {
                if value.is_empty() {
                    return ::core::option::Option::Some(Self::empty());
                }
                value.split(',').try_fold(Self::empty(), |acc, token| {
                    Self::FLAGS
                        .iter()
                        .find(|(_, wire)| *wire == token)
                        .map(|(flag, _)| Self(acc.0 | flag.0))
                })
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::core::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.to_wire_string())
            }
        }

        impl $crate::WireEnum for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn to_wire(self) -> ::std::string::String {
                self.to_wire_string()
            }

            fn parse_wire(value: &str) -> ::core::option::Option<Self> {
                Self::parse(value)
            }

            fn to_bits(self) -> u64 {
                self.0
            }

            fn from_bits(bits: u64) -> ::core::option::Option<Self> {
                Self::from_bits(bits)
            }
        }
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::WireEnum;

    crate::wire_enum! {
        /// Test enum with a sentinel in the middle.
        enum Phase: "phase" {
            /// First.
            Draft = "draft",
            /// Second.
            Live = "live",
            /// Sentinel.
            UnknownFutureValue = "unknownFutureValue",
            /// Added after the sentinel.
            Archived = "archived",
        }
    }

    crate::flag_enum! {
        /// Test flags.
        struct Abc: "abc" {
            /// A.
            const A = 1 => "A";
            /// B.
            const B = 2 => "B";
            /// C.
            const C = 4 => "C";
        }
    }

    #[test]
    fn string_table_is_indexed_by_value() {
        assert_eq!(Phase::NAMES[Phase::Archived as usize], "archived");
        assert_eq!(Phase::Archived.to_bits(), 3);
        assert_eq!(Phase::from_bits(1), Some(Phase::Live));
        assert_eq!(Phase::from_bits(4), None);
    }

    #[test]
    fn parse_is_inverse_of_display() {
        for phase in Phase::ALL {
            assert_eq!(Phase::parse(&phase.to_string()), Some(*phase));
        }
        assert_eq!(Phase::parse("not-a-real-value"), None);
        assert_eq!(Phase::parse("Draft"), None);
    }

    #[test]
    fn flags_compose_in_declared_order() {
        let parsed = Abc::parse("C,A").expect("known tokens");
        assert_eq!(parsed, Abc::A | Abc::C);
        assert_eq!(parsed.to_wire_string(), "A,C");
        assert_eq!(Abc::parse("A,C").map(Abc::to_wire), Some("A,C".to_owned()));
    }

    #[test]
    fn one_bad_token_rejects_the_set() {
        assert_eq!(Abc::parse("A,bogus"), None);
        assert_eq!(Abc::parse("A,,B"), None);
        assert_eq!(Abc::parse(","), None);
    }

    #[test]
    fn undeclared_bits_are_rejected() {
        assert_eq!(Abc::from_bits(8), None);
        assert_eq!(<Abc as WireEnum>::from_bits(3), Some(Abc::A | Abc::B));
        assert!(Abc::empty().to_wire_string().is_empty());
    }

    #[test]
    fn empty_set_survives_its_wire_form() {
        let empty = Abc::empty();
        assert_eq!(Abc::parse(&empty.to_wire_string()), Some(empty));
        assert_eq!(<Abc as WireEnum>::parse_wire(""), Some(Abc::empty()));
    }
}
