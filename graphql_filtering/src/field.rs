// SPDX-License-Identifier: AGPL-3.0-or-later

//! Field metadata the templates are generated from.
use serde::{Deserialize, Serialize};

/// Prefix marking a field name as array-typed.
pub const ARRAY_FIELD_PREFIX: char = '[';

/// Name and GraphQL type of a single field on the type we generate input types for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name. Names starting with `[` denote array-typed fields.
    pub name: String,

    /// GraphQL scalar or type name of the field, for example `String`.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Optional description, rendered as a comment by the default field converter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDescriptor {
    /// Returns a field descriptor without description.
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_owned(),
            type_name: type_name.to_owned(),
            description: None,
        }
    }

    /// Attach a description to this field.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Returns true when the field name follows the array field convention.
    pub fn is_array(&self) -> bool {
        self.name.starts_with(ARRAY_FIELD_PREFIX)
    }
}

/// Type name and fields passed to every template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInput {
    /// Name of the GraphQL object type, for example `Movie`.
    #[serde(alias = "typeName")]
    pub type_name: String,

    /// Fields in the order they should appear in the generated input types.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl TemplateInput {
    /// Returns template input for the given type name and fields.
    pub fn new(type_name: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            type_name: type_name.to_owned(),
            fields,
        }
    }
}
