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

use crate::json::{Decode, Decoder};
use crate::{Attribute, BuildError, Record};
use serde::ser::SerializeMap;
use serde_json::Value;

/// An immutable, ordered list of records.
///
/// Lists of records appear as attributes of other records, and as the
/// payload of collection endpoints. In JSON they are plain arrays. A list
/// can also be a *link*: a reference to a collection, with an `href` and
/// possibly no items. Such lists use the object form:
///
/// ```json
/// { "kind": "AccountListLink", "href": "/api/accounts_mgmt/v1/accounts" }
/// ```
///
/// # Example
/// ```
/// # use ocm_model::{List, ListBuilder};
/// ocm_model::record! {
///     pub struct Capability {
///         name: String,
///     }
/// }
/// let list = ListBuilder::<Capability>::from([
///     Capability::builder().set_name("a"),
///     Capability::builder().set_name("b"),
/// ])
/// .build()?;
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(1).map(Capability::name), Some("b"));
///
/// let mut names = Vec::new();
/// list.each(|item| {
///     names.push(item.name().to_string());
///     false
/// });
/// assert_eq!(names, vec!["a"]);
/// # Ok::<(), ocm_model::BuildError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct List<T> {
    link: bool,
    href: Option<String>,
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            link: false,
            href: None,
            items: Vec::new(),
        }
    }
}

impl<T> List<T> {
    /// The number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The items, as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a copy of the items.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Iterates over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Calls `f` for each item, until `f` returns `false`.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in &self.items {
            if !f(item) {
                break;
            }
        }
    }

    /// Calls `f` for each item and its index, until `f` returns `false`.
    pub fn range<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        for (index, item) in self.items.iter().enumerate() {
            if !f(index, item) {
                break;
            }
        }
    }

    /// Returns true if the list is a link to a collection.
    pub fn is_link(&self) -> bool {
        self.link
    }

    /// The location of the collection, if known.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    fn is_plain(&self) -> bool {
        !self.link && self.href.is_none()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Record> serde::ser::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        if self.is_plain() {
            return serializer.collect_seq(&self.items);
        }
        let kind = if self.link {
            T::LIST_LINK_KIND
        } else {
            T::LIST_KIND
        };
        let mut map = serializer.serialize_map(None)?;
        if let Some(kind) = kind {
            map.serialize_entry("kind", kind)?;
        }
        if let Some(href) = &self.href {
            map.serialize_entry("href", href)?;
        }
        if !self.items.is_empty() {
            map.serialize_entry("items", &self.items)?;
        }
        map.end()
    }
}

/// Lists accept the array form and the object form.
impl<T: Record> Decode for List<T> {
    fn decode(value: &Value, decoder: &mut Decoder) -> Option<Self> {
        match value {
            Value::Array(_) => Vec::<T>::decode(value, decoder).map(List::from),
            Value::Object(object) => {
                let mut list = List::default();
                for (key, value) in object {
                    match key.as_str() {
                        "kind" => {
                            let kind = decoder.field::<String>(key, value);
                            list.link = kind.is_some() && kind.as_deref() == T::LIST_LINK_KIND;
                        }
                        "href" => list.href = decoder.field::<String>(key, value),
                        "items" => {
                            list.items = decoder.field::<Vec<T>>(key, value).unwrap_or_default();
                        }
                        _ => decoder.unknown_field(key),
                    }
                }
                Some(list)
            }
            _ => {
                decoder.report(format!(
                    "expected an array or an object with the items of a {} list",
                    T::TYPE_NAME
                ));
                None
            }
        }
    }
}

impl<'de, T: Record> serde::de::Deserialize<'de> for List<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::json::deserialize(deserializer)
    }
}

impl<T: Record> Attribute for List<T> {
    type Builder = ListBuilder<T>;
    type View<'a>
        = Option<&'a List<T>>
    where
        Self: 'a;

    fn view(&self) -> Option<&List<T>> {
        Some(self)
    }

    fn zero<'a>() -> Option<&'a List<T>>
    where
        Self: 'a,
    {
        None
    }

    fn build(builder: ListBuilder<T>) -> Result<Self, BuildError> {
        builder.build()
    }

    fn to_builder(&self) -> ListBuilder<T> {
        ListBuilder::new().copy(self)
    }
}

/// Stages the items of a [List].
///
/// The items are builders, they are built when the list is built. The list
/// build stops at the first item that fails, and returns its error with the
/// index of the item.
#[derive(Clone, Debug)]
pub struct ListBuilder<T: Attribute> {
    link: bool,
    href: Option<String>,
    items: Vec<T::Builder>,
}

impl<T: Attribute> Default for ListBuilder<T> {
    fn default() -> Self {
        Self {
            link: false,
            href: None,
            items: Vec::new(),
        }
    }
}

impl<T: Attribute> ListBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the items.
    pub fn set_items<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<T::Builder>,
    {
        self.items = v.into_iter().map(Into::into).collect();
        self
    }

    /// Appends an item.
    pub fn push<V: Into<T::Builder>>(mut self, v: V) -> Self {
        self.items.push(v.into());
        self
    }

    /// Marks the list as a link to a collection.
    pub fn set_link(mut self, v: bool) -> Self {
        self.link = v;
        self
    }

    /// Sets the location of the collection.
    pub fn set_href<V: Into<String>>(mut self, v: V) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Returns true if the builder has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of staged items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Replaces the contents with a copy of `list`.
    pub fn copy(mut self, list: &List<T>) -> Self {
        self.link = list.link;
        self.href = list.href.clone();
        self.items = list.items.iter().map(T::to_builder).collect();
        self
    }
}

impl<T: Record> ListBuilder<T> {
    /// Builds the list.
    ///
    /// Only lists of resources can be links, other records have no list kind
    /// to carry the link flag in JSON.
    pub fn build(self) -> Result<List<T>, BuildError> {
        if self.link && T::LIST_LINK_KIND.is_none() {
            return Err(BuildError::invalid(format!(
                "lists of {} cannot be links",
                T::TYPE_NAME
            )));
        }
        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| T::build(item).map_err(|e| e.in_item(index)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(List {
            link: self.link,
            href: self.href,
            items,
        })
    }
}

impl<T: Attribute, V: Into<T::Builder>> From<Vec<V>> for ListBuilder<T> {
    fn from(items: Vec<V>) -> Self {
        Self::new().set_items(items)
    }
}

impl<T: Attribute, V: Into<T::Builder>, const N: usize> From<[V; N]> for ListBuilder<T> {
    fn from(items: [V; N]) -> Self {
        Self::new().set_items(items)
    }
}

impl<T: Attribute, V: Into<T::Builder>> FromIterator<V> for ListBuilder<T> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new().set_items(iter)
    }
}

impl<T: Attribute> From<&List<T>> for ListBuilder<T> {
    fn from(list: &List<T>) -> Self {
        Self::new().copy(list)
    }
}

impl<T: Attribute> From<List<T>> for ListBuilder<T> {
    fn from(list: List<T>) -> Self {
        Self::new().copy(&list)
    }
}
