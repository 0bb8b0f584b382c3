//! Macros for declaring state enums.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Variant names double as state names. Optional `final:` and `error:` lists
/// mark terminal and error states.
///
/// # Example
///
/// ```
/// use calmly::core::State;
/// use calmly::state_enum;
///
/// state_enum! {
///     pub enum Breath {
///         In,
///         Out,
///         Done,
///     }
///     final: [Done]
/// }
///
/// assert_eq!(Breath::Out.name(), "Out");
/// assert!(Breath::Done.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns, clippy::match_single_binding)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns, clippy::match_single_binding)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
