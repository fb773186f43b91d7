// SPDX-License-Identifier: AGPL-3.0-or-later

use std::iter::FromIterator;

use serde::{Deserialize, Serialize};

/// Field types a filter can be generated for when no other list is configured.
pub const DEFAULT_SUPPORTED_FIELD_TYPES: [&str; 3] = ["String", "Int", "Date"];

/// Options changing the output of the filter and ordering templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// Field types which get a `<type>_Selector` filter in the where input type.
    pub supported_field_types: SupportedFieldTypes,

    /// Keep an empty line for every field with an unsupported type in the where input type.
    ///
    /// Only needed when the output has to match previously generated schemas byte by byte.
    /// Disabled by default.
    pub legacy_blank_lines: bool,

    /// Emit the `foo: OrderBy` and `bar: OrderBy` lines at the top of every ordering input type.
    /// Enabled by default.
    pub order_by_placeholders: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            supported_field_types: SupportedFieldTypes::default(),
            legacy_blank_lines: false,
            order_by_placeholders: true,
        }
    }
}

/// Ordered set of GraphQL type names a where filter can be generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SupportedFieldTypes(Vec<String>);

impl SupportedFieldTypes {
    /// Returns an empty allow-list.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns true if a filter can be generated for this field type.
    pub fn contains(&self, type_name: &str) -> bool {
        self.0.iter().any(|supported| supported == type_name)
    }

    /// Add a field type to the allow-list, ignoring duplicates.
    pub fn insert(&mut self, type_name: &str) {
        if !self.contains(type_name) {
            self.0.push(type_name.to_owned());
        }
    }

    /// Returns a copy of this allow-list extended by the given type.
    pub fn with(mut self, type_name: &str) -> Self {
        self.insert(type_name);
        self
    }

    /// Iterate over the supported field types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of supported field types.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field type is supported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SupportedFieldTypes {
    fn default() -> Self {
        DEFAULT_SUPPORTED_FIELD_TYPES.iter().copied().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SupportedFieldTypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut supported = Self::empty();
        for type_name in iter {
            supported.insert(type_name.as_ref());
        }
        supported
    }
}

impl<'de> Deserialize<'de> for SupportedFieldTypes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let type_names: Vec<String> = Vec::deserialize(deserializer)?;
        Ok(type_names.into_iter().collect())
    }
}
