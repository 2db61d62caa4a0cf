//! Macro for string conversions on lowercase wire enums
//!
//! Upstream rows carry enum values as lowercase strings (`"pending"`,
//! `"approved"`). This macro generates `as_str`, `Display` and a
//! case-insensitive `FromStr` from a single variant table so the wire
//! spelling lives in exactly one place.
//!
//! # Example
//!
//! ```rust
//! use mountview_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Decision {
//!     Approve,
//!     Deny,
//! }
//!
//! impl_wire_enum_conversions!(Decision {
//!     Approve => "approve",
//!     Deny => "deny",
//! });
//!
//! assert_eq!("APPROVE".parse::<Decision>(), Ok(Decision::Approve));
//! assert_eq!(Decision::Deny.as_str(), "deny");
//! ```

/// Implements `as_str`, `Display` and `FromStr` for a wire enum.
///
/// Parsing lowercases the whole input and compares it exactly, so
/// surrounding whitespace is not accepted.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Lowercase wire representation.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
