// SPDX-License-Identifier: AGPL-3.0-or-later

//! Where input types used to specify filter parameters on a type's fields.
//!
//! Every field with a supported type gets a filter pointing at the matching scalar selector, for
//! example `title: String_Selector` or, for array fields, `tags: String_Array_Selector`.
use log::debug;

use crate::config::TemplateOptions;
use crate::constants::{INDENT, SEARCH_COMMENT};
use crate::field::{FieldDescriptor, TemplateInput};
use crate::utils::{scalar_selector_name, where_input_name};

/// Build the where input type for the given fields.
///
/// Fields are kept in input order. Fields with types outside of the supported field types are
/// left out, or rendered as an empty line when `legacy_blank_lines` is set.
pub fn field_where_input_template(input: &TemplateInput, options: &TemplateOptions) -> String {
    let name = where_input_name(&input.type_name);
    debug!("Building where input type {}", name);

    let filters: Vec<String> = input
        .fields
        .iter()
        .map(|field| field_filter(field, options))
        .filter(|line| options.legacy_blank_lines || !line.is_empty())
        .collect();

    format!(
        "input {name} {{
{INDENT}_and: [{name}]
{INDENT}_not: {name}
{INDENT}_or: [{name}]
{INDENT}{SEARCH_COMMENT}
{INDENT}search: String
{INDENT}{filters}
}}",
        name = name,
        filters = filters.join("\n"),
    )
}

/// Filter line for a single field, empty if the field type is not supported.
fn field_filter(field: &FieldDescriptor, options: &TemplateOptions) -> String {
    if !options.supported_field_types.contains(&field.type_name) {
        debug!(
            "No filter for field '{}' with unsupported type '{}'",
            field.name, field.type_name
        );
        return String::new();
    }

    format!(
        "{}: {}",
        field.name,
        scalar_selector_name(&field.type_name, field.is_array())
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::config::{SupportedFieldTypes, TemplateOptions};
    use crate::field::{FieldDescriptor, TemplateInput};

    use super::field_where_input_template;

    fn legacy() -> TemplateOptions {
        TemplateOptions {
            legacy_blank_lines: true,
            ..TemplateOptions::default()
        }
    }

    #[test]
    fn where_input() {
        let input = TemplateInput::new(
            "Movie",
            vec![
                FieldDescriptor::new("title", "String"),
                FieldDescriptor::new("year", "Int"),
            ],
        );

        assert_eq!(
            field_where_input_template(&input, &TemplateOptions::default()),
            "input MovieWhereInput {
  _and: [MovieWhereInput]
  _not: MovieWhereInput
  _or: [MovieWhereInput]
  # will search across all searchable fields at the same time
  search: String
  title: String_Selector
year: Int_Selector
}"
        );
    }

    #[rstest]
    #[case("title", "String", "title: String_Selector")]
    #[case("year", "Int", "year: Int_Selector")]
    #[case("createdAt", "Date", "createdAt: Date_Selector")]
    #[case("[tags", "String", "[tags: String_Array_Selector")]
    #[case("[scores", "Int", "[scores: Int_Array_Selector")]
    fn supported_field_filters(
        #[case] name: &str,
        #[case] type_name: &str,
        #[case] expected_line: &str,
    ) {
        let input = TemplateInput::new("Movie", vec![FieldDescriptor::new(name, type_name)]);
        let sdl = field_where_input_template(&input, &TemplateOptions::default());

        assert!(sdl.lines().any(|line| line.trim() == expected_line), "{}", sdl);
    }

    #[rstest]
    #[case("rating", "Float")]
    #[case("published", "Boolean")]
    #[case("title", "string")]
    fn unsupported_fields_are_skipped(#[case] name: &str, #[case] type_name: &str) {
        let input = TemplateInput::new(
            "Movie",
            vec![
                FieldDescriptor::new(name, type_name),
                FieldDescriptor::new("year", "Int"),
            ],
        );
        let sdl = field_where_input_template(&input, &TemplateOptions::default());

        assert!(!sdl.contains(&format!("{}: ", name)));
        assert!(!sdl.contains("\n\n"));
        assert!(sdl.ends_with("  year: Int_Selector\n}"));
    }

    #[test]
    fn legacy_blank_lines_for_unsupported_fields() {
        let input = TemplateInput::new(
            "Movie",
            vec![
                FieldDescriptor::new("title", "String"),
                FieldDescriptor::new("rating", "Float"),
                FieldDescriptor::new("year", "Int"),
            ],
        );

        assert!(field_where_input_template(&input, &legacy())
            .ends_with("  title: String_Selector\n\nyear: Int_Selector\n}"));
    }

    #[test]
    fn keeps_input_order_and_duplicates() {
        let input = TemplateInput::new(
            "Movie",
            vec![
                FieldDescriptor::new("year", "Int"),
                FieldDescriptor::new("title", "String"),
                FieldDescriptor::new("year", "Int"),
            ],
        );

        assert!(
            field_where_input_template(&input, &TemplateOptions::default()).ends_with(
                "  year: Int_Selector\ntitle: String_Selector\nyear: Int_Selector\n}"
            )
        );
    }

    #[test]
    fn extended_allow_list() {
        let options = TemplateOptions {
            supported_field_types: SupportedFieldTypes::default().with("Float"),
            ..TemplateOptions::default()
        };
        let input = TemplateInput::new("Movie", vec![FieldDescriptor::new("rating", "Float")]);

        assert!(field_where_input_template(&input, &options).contains("rating: Float_Selector"));
    }

    #[test]
    fn without_fields() {
        let input = TemplateInput::new("Movie", vec![]);

        assert!(field_where_input_template(&input, &TemplateOptions::default())
            .ends_with("  search: String\n  \n}"));
    }
}
