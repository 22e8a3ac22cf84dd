// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements common code for enumerations.

use std::marker::PhantomData;

/// A value of an enumeration that is not known to this version of the
/// library.
///
/// The services add new values to enumerations over time. Such values are
/// preserved, they are sent back unchanged when the record is encoded.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct UnknownValue(String);

impl UnknownValue {
    /// The value used by enumerations that are not set.
    pub const EMPTY: UnknownValue = UnknownValue(String::new());

    /// Creates a new unknown value.
    pub fn new<T: Into<String>>(v: T) -> Self {
        Self(v.into())
    }

    /// The value, as it appears in JSON documents.
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[doc(hidden)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumVisitor<T> {
    name: &'static str,
    _unused: PhantomData<T>,
}

impl<T> EnumVisitor<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _unused: PhantomData,
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<T>
where
    T: for<'a> From<&'a str>,
{
    type Value = T;
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }
    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a {} value in string format", self.name)
    }
}

/// Defines an enumeration with string values.
///
/// The macro generates a Rust `enum` with one variant per known value, and
/// an `UnknownValue` variant for values added to the service after this
/// library was generated. The enumeration can be used as the type of an
/// attribute in [record!][crate::record] and [resource!][crate::resource].
///
/// Attributes of this type return the `UnknownValue` variant, with an empty
/// name, when they are not set.
///
/// # Example
/// ```
/// ocm_model::string_enum! {
///     /// The billing model of a subscription.
///     pub enum BillingModel {
///         /// Paid through a cloud marketplace.
///         Marketplace = "marketplace",
///         /// A standard subscription.
///         Standard = "standard",
///     }
/// }
/// assert_eq!(BillingModel::from("standard"), BillingModel::Standard);
/// assert_eq!(BillingModel::Marketplace.name(), "marketplace");
///
/// let future = BillingModel::from("from-the-future");
/// assert!(!future.is_known());
/// assert_eq!(future.to_string(), "from-the-future");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// A value not known to this version of the library.
            UnknownValue($crate::UnknownValue),
        }

        impl $name {
            /// The values known to this version of the library.
            pub const KNOWN_VALUES: &'static [&'static str] = &[$($value),*];

            /// The value, as it appears in JSON documents.
            pub fn name(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )*
                    Self::UnknownValue(u) => u.name(),
                }
            }

            /// Returns false for values not known to this version of the
            /// library.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::UnknownValue(_))
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::UnknownValue($crate::UnknownValue::EMPTY)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )*
                    _ => Self::UnknownValue($crate::UnknownValue::new(value)),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $crate::__private::serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::ser::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> $crate::__private::serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                deserializer.deserialize_str($crate::__private::EnumVisitor::<Self>::new(
                    stringify!($name),
                ))
            }
        }

        impl $crate::json::Decode for $name {
            fn decode(
                value: &$crate::__private::serde_json::Value,
                decoder: &mut $crate::json::Decoder,
            ) -> ::std::option::Option<Self> {
                decoder.expect_str(value).map(Self::from)
            }
        }

        impl $crate::Attribute for $name {
            type Builder = $name;
            type View<'a> = &'a $name;

            fn view(&self) -> &$name {
                self
            }

            fn zero<'a>() -> &'a $name {
                static ZERO: $name = $name::UnknownValue($crate::UnknownValue::EMPTY);
                &ZERO
            }

            fn build(builder: $name) -> ::std::result::Result<$name, $crate::BuildError> {
                ::std::result::Result::Ok(builder)
            }

            fn to_builder(&self) -> $name {
                self.clone()
            }
        }
    };
}
