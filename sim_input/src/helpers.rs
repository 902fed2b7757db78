use thiserror::Error;

/// Declares [MenuKey](crate::MenuKey) along with its name table.
///
/// The declaration order is the enumeration order used when scanning for a
/// key press, so keep related keys together.
macro_rules! menu_keys {
    ($($key:ident),* $(,)?) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize)]
        #[serde(try_from = "String")]
        pub enum MenuKey {
            $(
                $key,
            )*
        }

        impl MenuKey {
            /// Every key, in enumeration order.
            pub const ALL: &'static [MenuKey] = &[
                $(
                    MenuKey::$key,
                )*
            ];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(
                        Self::$key => stringify!($key),
                    )*
                }
            }
        }
    };
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("Empty key name")]
    Empty,
    #[error("Unknown key {0}")]
    UnknownKey(String),
}
