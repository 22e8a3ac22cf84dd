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

use crate::BuildError;
use crate::json::Decode;
use std::collections::BTreeMap;

/// A type that can be used as the type of an attribute in a record.
///
/// The [record!][crate::record] and [resource!][crate::resource] macros
/// generate the accessors, setters, and build steps of a record in terms of
/// this trait. Implementations exist for `String`, `bool`, `i32`, `i64`, `f64`,
/// [Timestamp][crate::Timestamp], generated records and enumerations,
/// [List][crate::List], `Vec<T>`, and `BTreeMap<String, T>`.
///
/// Each attribute type defines:
/// * the type used to stage values in builders ([Attribute::Builder]),
/// * the type returned by accessors ([Attribute::View]), and the value
///   returned when the attribute is not set ([Attribute::zero]).
pub trait Attribute:
    Clone + std::fmt::Debug + Default + PartialEq + serde::Serialize + Decode
{
    /// The type used to stage values of this type in builders.
    type Builder: Clone + std::fmt::Debug + Default;

    /// The type returned by the accessors of records.
    type View<'a>
    where
        Self: 'a;

    /// Returns the accessor view of a value.
    fn view(&self) -> Self::View<'_>;

    /// Returns the accessor view used when the attribute is not set.
    fn zero<'a>() -> Self::View<'a>
    where
        Self: 'a;

    /// Converts a staged value into the final value.
    fn build(builder: Self::Builder) -> Result<Self, BuildError>;

    /// Converts a final value back into a staged value.
    fn to_builder(&self) -> Self::Builder;
}

macro_rules! copy_attribute {
    ($($t:ty),*) => {
        $(
            impl Attribute for $t {
                type Builder = $t;
                type View<'a> = $t;

                fn view(&self) -> $t {
                    *self
                }

                fn zero<'a>() -> $t
                where
                    Self: 'a,
                {
                    <$t>::default()
                }

                fn build(builder: $t) -> Result<$t, BuildError> {
                    Ok(builder)
                }

                fn to_builder(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

copy_attribute!(bool, i32, i64);

/// JSON has no representation for NaN or the infinities, so `build` rejects
/// them.
impl Attribute for f64 {
    type Builder = f64;
    type View<'a> = f64;

    fn view(&self) -> f64 {
        *self
    }

    fn zero<'a>() -> f64
    where
        Self: 'a,
    {
        0.0
    }

    fn build(builder: f64) -> Result<f64, BuildError> {
        if builder.is_finite() {
            return Ok(builder);
        }
        Err(BuildError::invalid(format!(
            "{builder} cannot be represented in JSON"
        )))
    }

    fn to_builder(&self) -> f64 {
        *self
    }
}

impl Attribute for String {
    type Builder = String;
    type View<'a> = &'a str;

    fn view(&self) -> &str {
        self.as_str()
    }

    fn zero<'a>() -> &'a str {
        ""
    }

    fn build(builder: String) -> Result<String, BuildError> {
        Ok(builder)
    }

    fn to_builder(&self) -> String {
        self.clone()
    }
}

impl<T: Attribute> Attribute for Vec<T> {
    type Builder = Vec<T::Builder>;
    type View<'a>
        = &'a [T]
    where
        Self: 'a;

    fn view(&self) -> &[T] {
        self.as_slice()
    }

    fn zero<'a>() -> &'a [T]
    where
        Self: 'a,
    {
        &[]
    }

    fn build(builder: Vec<T::Builder>) -> Result<Vec<T>, BuildError> {
        builder
            .into_iter()
            .enumerate()
            .map(|(index, item)| T::build(item).map_err(|e| e.in_item(index)))
            .collect()
    }

    fn to_builder(&self) -> Vec<T::Builder> {
        self.iter().map(T::to_builder).collect()
    }
}

impl<T: Attribute> Attribute for BTreeMap<String, T> {
    type Builder = BTreeMap<String, T::Builder>;
    type View<'a>
        = Option<&'a BTreeMap<String, T>>
    where
        Self: 'a;

    fn view(&self) -> Option<&BTreeMap<String, T>> {
        Some(self)
    }

    fn zero<'a>() -> Option<&'a BTreeMap<String, T>>
    where
        Self: 'a,
    {
        None
    }

    fn build(builder: Self::Builder) -> Result<Self, BuildError> {
        builder
            .into_iter()
            .map(|(key, value)| match T::build(value) {
                Ok(v) => Ok((key, v)),
                Err(e) => Err(e.in_entry(key)),
            })
            .collect()
    }

    fn to_builder(&self) -> Self::Builder {
        self.iter()
            .map(|(key, value)| (key.clone(), value.to_builder()))
            .collect()
    }
}
