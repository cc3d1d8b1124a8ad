// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Declare a closed catalog: the enum, its numeric markup ids and display names,
/// plus the `Catalog` impl that backs every id → kind lookup.
///
/// ```text
/// catalog! { pub enum Ship { SmallCargo = 202 => "Small Cargo", ... } }
/// ```
#[macro_export]
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident = $id:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $variant ),+
        }

        impl $crate::catalog::Catalog for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn id(self) -> u32 {
                match self { $( $name::$variant => $id ),+ }
            }

            fn from_id(id: u32) -> Option<Self> {
                match id {
                    $( $id => Some($name::$variant), )+
                    _ => None,
                }
            }

            fn name(self) -> &'static str {
                match self { $( $name::$variant => $label ),+ }
            }
        }
    };
}
