// SPDX-License-Identifier: AGPL-3.0-or-later

//! SDL templates for selector, filter and ordering input types.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TemplateError;

mod filter;
mod order;
mod scalars;
mod selector;

pub use filter::field_where_input_template;
pub use order::field_order_by_input_template;
pub use scalars::{order_by_enum_template, scalar_array_selector_template, scalar_selector_template};
pub use selector::{selector_input_template, selector_unique_input_template};

/// The input types which can be generated for a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `<Type>SelectorInput`
    Selector,

    /// `<Type>SelectorUniqueInput`
    SelectorUnique,

    /// `<Type>WhereInput`
    Where,

    /// `<Type>OrderByInput`
    OrderBy,
}

impl TemplateKind {
    /// All templates in the order they get rendered by default.
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Selector,
        TemplateKind::SelectorUnique,
        TemplateKind::Where,
        TemplateKind::OrderBy,
    ];

    /// Name used to select this template in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Selector => "selector",
            TemplateKind::SelectorUnique => "selector_unique",
            TemplateKind::Where => "where",
            TemplateKind::OrderBy => "order_by",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");

        TemplateKind::ALL
            .iter()
            .find(|kind| kind.as_str() == normalized)
            .copied()
            .ok_or_else(|| TemplateError::UnknownTemplate(s.to_owned()))
    }
}

impl Serialize for TemplateKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
