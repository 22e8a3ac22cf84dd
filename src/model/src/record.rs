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

use crate::{Attribute, FieldSet};

/// Implemented by all the types generated with [record!][crate::record] and
/// [resource!][crate::resource].
pub trait Record: Attribute {
    /// The name of the type, for example `CloudAccount`.
    const TYPE_NAME: &'static str;

    /// The `kind` of a list of these records, if the list has one.
    const LIST_KIND: Option<&'static str>;

    /// The `kind` of a link to a list of these records, if any.
    const LIST_LINK_KIND: Option<&'static str>;

    /// The attributes explicitly set in this record.
    fn field_set(&self) -> FieldSet;

    /// Returns true if no attribute is set.
    fn is_empty(&self) -> bool;
}

/// The three forms in which a resource can appear in a document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// A fully populated object.
    Object,
    /// A reference to the object, typically with only `id` and `href`.
    Link,
    /// A reference to no object.
    Nil,
}

/// Implemented by the addressable records, the types generated with
/// [resource!][crate::resource].
///
/// Resources have an identifier, a location (`href`), and a `kind`
/// discriminator. The discriminator tells apart a full object from a link
/// stub, and from a reference to nothing:
///
/// | Kind          | JSON `kind`      |
/// | ------------- | ---------------- |
/// | [Kind::Object] | `<Type>`        |
/// | [Kind::Link]   | `<Type>Link`    |
/// | [Kind::Nil]    | `<Type>Nil`     |
///
/// # Example
/// ```
/// # use ocm_model::{Kind, Resource};
/// ocm_model::resource! {
///     pub struct Label {
///         key: String,
///         value: String,
///     }
/// }
/// let label = Label::builder().set_link(true).set_id("123").build()?;
/// assert_eq!(label.kind(), Kind::Link);
/// assert_eq!(label.kind_name(), "LabelLink");
/// assert_eq!(ocm_model::kind_of::<Label>(None), "LabelNil");
/// # Ok::<(), ocm_model::BuildError>(())
/// ```
pub trait Resource: Record {
    /// The `kind` of a full object.
    const KIND: &'static str;

    /// The `kind` of a link to an object.
    const LINK_KIND: &'static str;

    /// The `kind` of a reference to no object.
    const NIL_KIND: &'static str;

    /// Returns true if this is a link stub.
    fn is_link(&self) -> bool;

    /// The identifier of the resource, or the empty string.
    fn id(&self) -> &str;

    /// The location of the resource, or the empty string.
    fn href(&self) -> &str;

    /// The form of this resource.
    fn kind(&self) -> Kind {
        if self.is_link() {
            Kind::Link
        } else {
            Kind::Object
        }
    }

    /// The value of the `kind` discriminator for this resource.
    fn kind_name(&self) -> &'static str {
        match self.kind() {
            Kind::Object => Self::KIND,
            Kind::Link => Self::LINK_KIND,
            Kind::Nil => Self::NIL_KIND,
        }
    }
}

/// Returns the `kind` discriminator of an optional resource.
///
/// `None` is the nil reference.
pub fn kind_of<R: Resource>(resource: Option<&R>) -> &'static str {
    resource.map_or(R::NIL_KIND, R::kind_name)
}
