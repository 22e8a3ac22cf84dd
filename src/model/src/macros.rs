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

//! The macros that generate records, builders, and codecs from a schema.

/// Defines a record: an object type without identity.
///
/// The body lists the attributes in schema order, each with a name and a
/// type implementing [Attribute][crate::Attribute]. The JSON name of an
/// attribute is its Rust name, unless overridden with `as "json_name"`.
///
/// For a record named `Contract` the macro generates:
///
/// * The `Contract` type, with one accessor per attribute (`start_date()`)
///   returning the value or its zero value, and one `get_*` accessor
///   (`get_start_date()`) returning `None` when the attribute is not set.
/// * The `ContractBuilder` type, with `set_*` and `set_or_clear_*` setters,
///   `copy()`, `is_empty()`, and `build()`.
/// * Implementations of [Record][crate::Record], [Attribute][crate::Attribute],
///   [Decode][crate::json::Decode], [serde::Serialize] and
///   [serde::Deserialize].
///
/// # Example
/// ```
/// use ocm_model::{List, Timestamp};
///
/// ocm_model::record! {
///     /// A dimension of a contract.
///     pub struct ContractDimension {
///         name: String,
///         value: String,
///     }
/// }
///
/// ocm_model::record! {
///     /// A contract.
///     pub struct Contract {
///         dimensions: List<ContractDimension>,
///         start_date: Timestamp,
///         end_date: Timestamp,
///     }
/// }
///
/// let contract = Contract::builder()
///     .set_dimensions([ContractDimension::builder().set_name("cpu").set_value("4")])
///     .set_start_date("2025-01-01T00:00:00Z")
///     .build()?;
/// assert_eq!(contract.dimensions().map(List::len), Some(1));
/// assert!(contract.get_end_date().is_none());
/// assert_eq!(contract.end_date(), Timestamp::default());
/// # Ok::<(), ocm_model::BuildError>(())
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::__model_record! {
            flavor = record,
            reserved = [],
            $(#[$meta])*
            $vis struct $name {
                $($body)*
            }
        }
    };
}

/// Defines a resource: an object type with identity.
///
/// Resources are records with two implicit attributes, `id` and `href`, and
/// a `kind` discriminator in their JSON form. A resource is either a full
/// object (`"kind": "Account"`) or a link stub (`"kind": "AccountLink"`),
/// typically with only `id` and `href`. A `"kind": "AccountNil"` value
/// decodes as an absent value.
///
/// The macro generates everything [record!][crate::record] does, plus
/// `id()`, `href()`, `is_link()`, the `set_link()`, `set_id()` and
/// `set_href()` setters, and an implementation of
/// [Resource][crate::Resource].
///
/// # Example
/// ```
/// use ocm_model::json;
///
/// ocm_model::resource! {
///     /// An organization.
///     pub struct Organization {
///         external_id: String,
///         name: String,
///     }
/// }
///
/// let org = Organization::builder().set_id("123").set_name("acme").build()?;
/// let text = json::to_string(&org)?;
/// assert_eq!(text, r#"{"kind":"Organization","id":"123","name":"acme"}"#);
///
/// let link = json::unmarshal::<Organization>(r#"{"kind":"OrganizationLink","id":"123"}"#)?;
/// assert!(link.is_link());
/// assert_eq!(link.id(), "123");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[macro_export]
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::__model_record! {
            flavor = resource,
            reserved = [__link],
            $(#[$meta])*
            $vis struct $name {
                /// The identifier of the object.
                id: ::std::string::String,
                /// The location of the object.
                href: ::std::string::String,
                $($body)*
            }
        }

        $crate::__private::paste! {
            impl $name {
                /// Returns true if this is a link to the object, as opposed
                /// to the full object.
                pub fn is_link(&self) -> bool {
                    self.field_set.contains([<__ $name Field>]::__link as u32)
                }
            }

            #[allow(dead_code)]
            impl [<$name Builder>] {
                /// Marks the object as a link.
                pub fn set_link(mut self, v: bool) -> Self {
                    self.field_set.assign([<__ $name Field>]::__link as u32, v);
                    self
                }
            }

            impl $crate::Resource for $name {
                const KIND: &'static str = stringify!($name);
                const LINK_KIND: &'static str = concat!(stringify!($name), "Link");
                const NIL_KIND: &'static str = concat!(stringify!($name), "Nil");

                fn is_link(&self) -> bool {
                    $name::is_link(self)
                }

                fn id(&self) -> &str {
                    $name::id(self)
                }

                fn href(&self) -> &str {
                    $name::href(self)
                }
            }
        }
    };
}

/// The JSON name of an attribute.
#[doc(hidden)]
#[macro_export]
macro_rules! __json_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $json:literal) => {
        $json
    };
}

/// The pieces of generated code that differ between records and resources.
#[doc(hidden)]
#[macro_export]
macro_rules! __model_flavor {
    (record, is_empty, $set:expr) => {
        $set.is_empty()
    };
    (resource, is_empty, $set:expr) => {
        // Bit 0 is the link flag, it is not an attribute.
        $set.is_empty_except(0)
    };
    (record, list_kind, $name:ident, $suffix:literal) => {
        ::std::option::Option::None
    };
    (resource, list_kind, $name:ident, $suffix:literal) => {
        ::std::option::Option::Some(concat!(stringify!($name), $suffix))
    };
    (record, write_kind, $map:ident, $value:expr) => {};
    (resource, write_kind, $map:ident, $value:expr) => {
        $map.serialize_entry("kind", $crate::Resource::kind_name($value))?;
    };
    (record, read_kind, $object:ident, $record:ident) => {};
    (resource, read_kind, $object:ident, $record:ident) => {
        match $object
            .get("kind")
            .and_then($crate::__private::serde_json::Value::as_str)
        {
            ::std::option::Option::Some(kind) if kind == <Self as $crate::Resource>::NIL_KIND => {
                return ::std::option::Option::None;
            }
            ::std::option::Option::Some(kind) if kind == <Self as $crate::Resource>::LINK_KIND => {
                $record.field_set.insert(0);
            }
            _ => {}
        }
    };
    (record, skip_key, $key:expr) => {
        false
    };
    (resource, skip_key, $key:expr) => {
        $key == "kind"
    };
}

/// Generates the record, builder, and codecs for [record!] and [resource!].
#[doc(hidden)]
#[macro_export]
macro_rules! __model_record {
    (
        flavor = $flavor:ident,
        reserved = [$($reserved:ident),*],
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty $(as $json:literal)?
            ),* $(,)?
        }
    ) => {
        $crate::__private::paste! {
            // The position of each attribute in the presence bitmap.
            #[doc(hidden)]
            #[allow(non_camel_case_types, dead_code)]
            #[repr(u32)]
            enum [<__ $name Field>] {
                $( $reserved, )*
                $( $field, )*
                __Count,
            }

            const _: () = assert!(([<__ $name Field>]::__Count as u32) <= $crate::FieldSet::CAPACITY);

            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq)]
            $vis struct $name {
                field_set: $crate::FieldSet,
                $( $field: $ty, )*
            }

            #[allow(dead_code)]
            impl $name {
                /// Returns a builder for this type.
                pub fn builder() -> [<$name Builder>] {
                    [<$name Builder>]::new()
                }

                /// Returns a builder initialized with a copy of this object.
                pub fn to_builder(&self) -> [<$name Builder>] {
                    [<$name Builder>]::new().copy(self)
                }

                /// Returns true if no attribute is set.
                pub fn is_empty(&self) -> bool {
                    $crate::__model_flavor!($flavor, is_empty, self.field_set)
                }

                $(
                    $(#[$fmeta])*
                    ///
                    #[doc = concat!("Returns the zero value if `", stringify!($field), "` is not set.")]
                    pub fn $field(&self) -> <$ty as $crate::Attribute>::View<'_> {
                        if self.field_set.contains([<__ $name Field>]::$field as u32) {
                            $crate::Attribute::view(&self.$field)
                        } else {
                            <$ty as $crate::Attribute>::zero()
                        }
                    }

                    #[doc = concat!("Returns the value of `", stringify!($field), "`, or `None` if it is not set.")]
                    pub fn [<get_ $field>](&self) -> ::std::option::Option<&$ty> {
                        self.field_set
                            .contains([<__ $name Field>]::$field as u32)
                            .then_some(&self.$field)
                    }
                )*
            }

            #[doc = concat!("A builder for [", stringify!($name), "].")]
            #[derive(Clone, Debug, Default)]
            $vis struct [<$name Builder>] {
                field_set: $crate::FieldSet,
                $( $field: <$ty as $crate::Attribute>::Builder, )*
            }

            #[allow(dead_code)]
            impl [<$name Builder>] {
                /// Creates a builder with no attributes set.
                pub fn new() -> Self {
                    ::std::default::Default::default()
                }

                /// Returns true if no attribute is set.
                pub fn is_empty(&self) -> bool {
                    $crate::__model_flavor!($flavor, is_empty, self.field_set)
                }

                /// Replaces the contents of the builder with a copy of `object`.
                pub fn copy(mut self, object: &$name) -> Self {
                    self.field_set = object.field_set;
                    $( self.$field = $crate::Attribute::to_builder(&object.$field); )*
                    self
                }

                $(
                    #[doc = concat!("Sets the value of `", stringify!($field), "`.")]
                    pub fn [<set_ $field>]<V>(mut self, v: V) -> Self
                    where
                        V: ::std::convert::Into<<$ty as $crate::Attribute>::Builder>,
                    {
                        self.$field = v.into();
                        self.field_set.insert([<__ $name Field>]::$field as u32);
                        self
                    }

                    #[doc = concat!("Sets or clears the value of `", stringify!($field), "`.")]
                    pub fn [<set_or_clear_ $field>]<V>(mut self, v: ::std::option::Option<V>) -> Self
                    where
                        V: ::std::convert::Into<<$ty as $crate::Attribute>::Builder>,
                    {
                        match v {
                            ::std::option::Option::Some(v) => self.[<set_ $field>](v),
                            ::std::option::Option::None => {
                                self.$field = ::std::default::Default::default();
                                self.field_set.remove([<__ $name Field>]::$field as u32);
                                self
                            }
                        }
                    }
                )*

                /// Builds the object.
                ///
                /// Fails on the first attribute that cannot be built, the
                /// error includes the path to the attribute.
                pub fn build(self) -> ::std::result::Result<$name, $crate::BuildError> {
                    let field_set = self.field_set;
                    ::std::result::Result::Ok($name {
                        field_set,
                        $(
                            $field: if field_set.contains([<__ $name Field>]::$field as u32) {
                                <$ty as $crate::Attribute>::build(self.$field).map_err(|e| {
                                    e.in_attribute($crate::__json_name!($field $(, $json)?))
                                })?
                            } else {
                                ::std::default::Default::default()
                            },
                        )*
                    })
                }
            }

            impl ::std::convert::From<&$name> for [<$name Builder>] {
                fn from(object: &$name) -> Self {
                    object.to_builder()
                }
            }

            impl ::std::convert::From<$name> for [<$name Builder>] {
                fn from(object: $name) -> Self {
                    object.to_builder()
                }
            }

            impl $crate::Record for $name {
                const TYPE_NAME: &'static str = stringify!($name);
                const LIST_KIND: ::std::option::Option<&'static str> =
                    $crate::__model_flavor!($flavor, list_kind, $name, "List");
                const LIST_LINK_KIND: ::std::option::Option<&'static str> =
                    $crate::__model_flavor!($flavor, list_kind, $name, "ListLink");

                fn field_set(&self) -> $crate::FieldSet {
                    self.field_set
                }

                fn is_empty(&self) -> bool {
                    $name::is_empty(self)
                }
            }

            impl $crate::Attribute for $name {
                type Builder = [<$name Builder>];
                type View<'a> = ::std::option::Option<&'a $name>;

                fn view(&self) -> ::std::option::Option<&$name> {
                    ::std::option::Option::Some(self)
                }

                fn zero<'a>() -> ::std::option::Option<&'a $name> {
                    ::std::option::Option::None
                }

                fn build(builder: [<$name Builder>]) -> ::std::result::Result<$name, $crate::BuildError> {
                    builder.build()
                }

                fn to_builder(&self) -> [<$name Builder>] {
                    $name::to_builder(self)
                }
            }

            impl $crate::__private::serde::ser::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
                where
                    S: $crate::__private::serde::ser::Serializer,
                {
                    use $crate::__private::serde::ser::SerializeMap as _;
                    let mut map = serializer.serialize_map(::std::option::Option::None)?;
                    $crate::__model_flavor!($flavor, write_kind, map, self);
                    $(
                        if self.field_set.contains([<__ $name Field>]::$field as u32) {
                            map.serialize_entry($crate::__json_name!($field $(, $json)?), &self.$field)?;
                        }
                    )*
                    map.end()
                }
            }

            impl $crate::json::Decode for $name {
                fn decode(
                    value: &$crate::__private::serde_json::Value,
                    decoder: &mut $crate::json::Decoder,
                ) -> ::std::option::Option<Self> {
                    let object = decoder.expect_object(value)?;
                    let mut record = Self::default();
                    $crate::__model_flavor!($flavor, read_kind, object, record);
                    'keys: for (key, value) in object {
                        if $crate::__model_flavor!($flavor, skip_key, key) {
                            continue;
                        }
                        $(
                            if key == $crate::__json_name!($field $(, $json)?) {
                                if let ::std::option::Option::Some(v) = decoder.field::<$ty>(key, value) {
                                    record.$field = v;
                                    record.field_set.insert([<__ $name Field>]::$field as u32);
                                }
                                continue 'keys;
                            }
                        )*
                        decoder.unknown_field(key);
                    }
                    ::std::option::Option::Some(record)
                }
            }

            impl<'de> $crate::__private::serde::de::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                where
                    D: $crate::__private::serde::Deserializer<'de>,
                {
                    $crate::json::deserialize(deserializer)
                }
            }
        }
    };
}
