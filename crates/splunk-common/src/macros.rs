/// Declare a closed enumeration whose variants each carry a fixed wire value.
///
/// Generates the enum, an explicit `as_str()` accessor for the wire value, an
/// `ALL` list in declaration order, `Display` and `FromStr` over the wire
/// value, and serde impls that read and write the wire value.
///
/// `Debug` keeps the symbolic variant name, so a wire value only ever comes
/// out of `as_str()` or `Display`.
///
/// ```
/// splunk_common::wire_enum! {
///     /// Sort direction
///     pub enum Direction {
///         /// Smallest first
///         Asc = "asc",
///         /// Largest first
///         Desc = "desc",
///     }
/// }
///
/// assert_eq!(Direction::Desc.as_str(), "desc");
/// assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Asc);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            $crate::serde::Serialize,
            $crate::serde::Deserialize
        )]
        #[serde(crate = "splunk_common::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The REST API value for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::error::UnknownVariant;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::error::UnknownVariant::new(stringify!($name), s)),
                }
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

/// Declare a typed argument set from a table of setters.
///
/// Each row is `fn setter(kind) => "key";`, with its doc comment above it.
/// The generated struct wraps an [`Args`](crate::args::Args) and exposes only
/// the listed setters for mutation, so its keys stay within the table.
///
/// Kinds:
/// - `int` takes anything `Into<i64>` and stores an integer
/// - `str` takes anything `Into<SmolStr>` and stores a string
/// - `list` takes an iterator of `Into<SmolStr>` and stores the items in order
/// - `wire: Type` takes a [`wire_enum!`](crate::wire_enum) type and stores its wire value
///
/// Every setter overwrites its key and returns `&mut Self` for chaining.
///
/// ```
/// splunk_common::wire_enum! {
///     pub enum Mode {
///         Fast = "fast",
///         Verbose = "verbose",
///     }
/// }
///
/// splunk_common::args_struct! {
///     /// Arguments for a made-up endpoint
///     pub struct PingArgs {
///         /// How many to send
///         fn count(int) => "count";
///         /// Which mode to run in
///         fn mode(wire: Mode) => "mode";
///     }
/// }
///
/// let mut args = PingArgs::new();
/// args.count(3).mode(Mode::Verbose);
/// assert_eq!(args.args().to_query_string().unwrap(), "count=3&mode=verbose");
/// ```
#[macro_export]
macro_rules! args_struct {
    (@setter $(#[$m:meta])* $setter:ident, $key:literal, int) => {
        $(#[$m])*
        pub fn $setter(&mut self, value: impl ::core::convert::Into<i64>) -> &mut Self {
            self.0.set($key, $crate::args::ArgValue::Int(value.into()));
            self
        }
    };

    (@setter $(#[$m:meta])* $setter:ident, $key:literal, str) => {
        $(#[$m])*
        pub fn $setter(
            &mut self,
            value: impl ::core::convert::Into<$crate::smol_str::SmolStr>,
        ) -> &mut Self {
            self.0.set($key, $crate::args::ArgValue::Str(value.into()));
            self
        }
    };

    (@setter $(#[$m:meta])* $setter:ident, $key:literal, list) => {
        $(#[$m])*
        pub fn $setter<I>(&mut self, values: I) -> &mut Self
        where
            I: ::core::iter::IntoIterator,
            I::Item: ::core::convert::Into<$crate::smol_str::SmolStr>,
        {
            let values = values
                .into_iter()
                .map(::core::convert::Into::<$crate::smol_str::SmolStr>::into)
                .collect();
            self.0.set($key, $crate::args::ArgValue::List(values));
            self
        }
    };

    (@setter $(#[$m:meta])* $setter:ident, $key:literal, wire: $ty:ty) => {
        $(#[$m])*
        pub fn $setter(&mut self, value: $ty) -> &mut Self {
            self.0.set(
                $key,
                $crate::args::ArgValue::Str($crate::smol_str::SmolStr::new_static(value.as_str())),
            );
            self
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$setter_meta:meta])*
                fn $setter:ident($kind:ident $(: $ty:ty)?) => $key:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, $crate::serde::Serialize)]
        #[serde(crate = "splunk_common::serde", transparent)]
        $vis struct $name($crate::args::Args);

        impl $name {
            /// Create an empty argument set.
            pub fn new() -> Self {
                Self::default()
            }

            /// Every argument set so far.
            pub fn args(&self) -> &$crate::args::Args {
                &self.0
            }

            /// Take the underlying argument map.
            pub fn into_args(self) -> $crate::args::Args {
                self.0
            }

            $(
                $crate::args_struct!(@setter $(#[$setter_meta])* $setter, $key, $kind $(: $ty)?);
            )*
        }

        impl ::core::convert::AsRef<$crate::args::Args> for $name {
            fn as_ref(&self) -> &$crate::args::Args {
                &self.0
            }
        }

        impl ::core::convert::From<$name> for $crate::args::Args {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}
