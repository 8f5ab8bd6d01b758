//! DRY macro for the closed answer sets of the questionnaire.
//!
//! Every questionnaire answer is a small closed enumeration with a literal
//! snake_case value. The literal is used for serde, for parsing, and as the
//! token inside profile identifiers, so it is declared once per variant.
//!
//! # Usage
//!
//! ```ignore
//! answer_set! {
//!     /// Biological sex.
//!     Sex {
//!         Male => "male",
//!         Female => "female",
//!     }
//! }
//!
//! assert_eq!(Sex::Male.as_str(), "male");
//! assert_eq!("female".parse::<Sex>()?, Sex::Female);
//! ```

/// Declares a closed answer enum with its literal values.
///
/// Generates:
/// - the enum with serde renames bound to the literals
/// - `ALL`, every value in questionnaire order
/// - `as_str()`, the literal value
/// - `Display` (the literal) and `FromStr` (literal back to value)
macro_rules! answer_set {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every value of the set, in questionnaire order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the literal value of this answer.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::domain::foundation::ValidationError::invalid_format(
                        stringify!($name),
                        format!("unknown value '{}'", other),
                    )),
                }
            }
        }
    };
}
