// SPDX-License-Identifier: AGPL-3.0-or-later

//! Conversion of field descriptors into SDL field lines.
//!
//! The selector templates do not know how a field list is rendered, they delegate this to a
//! [`FieldConverter`] handed in by the caller. Any closure with the signature
//! `Fn(&[FieldDescriptor], &str) -> String` can be used as a converter which makes it easy to stub
//! in tests.
use crate::field::{FieldDescriptor, ARRAY_FIELD_PREFIX};

/// Renders a list of fields as SDL field lines, each prefixed with `indent`.
pub trait FieldConverter {
    /// Convert the given fields into newline separated SDL field lines.
    fn convert(&self, fields: &[FieldDescriptor], indent: &str) -> String;
}

impl<F> FieldConverter for F
where
    F: Fn(&[FieldDescriptor], &str) -> String,
{
    fn convert(&self, fields: &[FieldDescriptor], indent: &str) -> String {
        self(fields, indent)
    }
}

/// Default converter rendering every field as `<name>: <type>`.
///
/// Array fields (names starting with `[`) lose their brackets and get a list type instead, a
/// field description is rendered as a comment line above the field.
#[derive(Clone, Copy, Debug, Default)]
pub struct SdlFieldConverter;

impl FieldConverter for SdlFieldConverter {
    fn convert(&self, fields: &[FieldDescriptor], indent: &str) -> String {
        let mut lines = Vec::with_capacity(fields.len());

        for field in fields {
            if let Some(description) = &field.description {
                lines.push(format!("{indent}# {description}"));
            }

            let line = if field.is_array() {
                let name = field
                    .name
                    .trim_start_matches(ARRAY_FIELD_PREFIX)
                    .trim_end_matches(']');
                format!("{indent}{name}: [{}]", field.type_name)
            } else {
                format!("{indent}{}: {}", field.name, field.type_name)
            };
            lines.push(line);
        }

        lines.join("\n")
    }
}
