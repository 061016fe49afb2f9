//! Helper macro for declaring typed error enums at the domain edges.
//!
//! Each variant gets a `thiserror` message, a snake-case constructor whose
//! parameters accept anything convertible into the field types, and a stable
//! snake-case `code()` used in error details.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (@pattern $variant:ident) => { Self::$variant };
    (@pattern $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => { Self::$variant { .. } };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Stable snake-case identifier of the variant.
            pub fn code(&self) -> &'static str {
                ::paste::paste! {
                    match self {
                        $(
                            define_port_error!(@pattern $variant $( { $($field : $ty),* } )?) =>
                                stringify!([<$variant:snake>]),
                        )*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ExamplePortError {
            Missing { id: u64 } => "entry {id} is missing",
            Clash => "entry already exists",
            Labelled { label: String, id: u64 } => "{label} ({id})",
        }
    }

    #[test]
    fn constructors_accept_convertible_fields() {
        let err = ExamplePortError::labelled("phone", 7_u32);
        assert_eq!(err.to_string(), "phone (7)");
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(ExamplePortError::clash(), ExamplePortError::Clash);
    }

    #[test]
    fn codes_are_snake_case_variant_names() {
        assert_eq!(ExamplePortError::missing(3_u64).code(), "missing");
        assert_eq!(ExamplePortError::clash().code(), "clash");
        assert_eq!(
            ExamplePortError::labelled("x", 1_u64).code(),
            "labelled"
        );
    }
}
