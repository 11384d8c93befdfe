//! Helper macros shared by the domain models.

/// Declare a closed, string-backed enumeration.
///
/// Generates the enum with serde names, `as_str`, `all_variants`, `Display`
/// and a `FromStr` that rejects unknown values with
/// [`NotifyError::InvalidValue`](crate::error::NotifyError::InvalidValue).
/// Parsing is case-insensitive and ignores surrounding whitespace.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }

            pub fn all_variants() -> &'static [&'static str] {
                &[$( $text ),+]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::NotifyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $( $text => Ok(Self::$variant), )+
                    _ => Err($crate::error::NotifyError::invalid_value($field, s)),
                }
            }
        }
    };
}

pub(crate) use closed_enum;
