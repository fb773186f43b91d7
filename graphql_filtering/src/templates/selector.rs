// SPDX-License-Identifier: AGPL-3.0-or-later

//! Selector input types used to query for documents.
//!
//! A selector input for the type `Movie` looks like this, the field lines are produced by the
//! injected [`FieldConverter`]:
//!
//! ```graphql
//! input MovieSelectorInput {
//!   _and: [MovieSelectorInput]
//!   _or: [MovieSelectorInput]
//!   title: String
//! }
//! ```
use log::debug;

use crate::constants::{INDENT, UNIQUE_SELECTOR_FIELDS};
use crate::converter::FieldConverter;
use crate::field::TemplateInput;
use crate::utils::{selector_input_name, selector_unique_input_name};

/// Build the selector input type which is used to query for one or more documents.
///
/// Selectors can be combined with `_and` and `_or`.
pub fn selector_input_template<C>(input: &TemplateInput, converter: &C) -> String
where
    C: FieldConverter + ?Sized,
{
    let name = selector_input_name(&input.type_name);
    debug!("Building selector input type {}", name);

    format!(
        "input {name} {{\n{INDENT}_and: [{name}]\n{INDENT}_or: [{name}]\n{fields}\n}}",
        name = name,
        fields = converter.convert(&input.fields, INDENT),
    )
}

/// Build the unique selector input type which is used to query for exactly one document.
///
/// A unique selector always offers the identity fields `_id`, `documentId` and `slug`. It can't be
/// combined with other selectors.
pub fn selector_unique_input_template<C>(input: &TemplateInput, converter: &C) -> String
where
    C: FieldConverter + ?Sized,
{
    let name = selector_unique_input_name(&input.type_name);
    debug!("Building unique selector input type {}", name);

    let identity_fields: String = UNIQUE_SELECTOR_FIELDS
        .iter()
        .map(|line| format!("{INDENT}{line}\n"))
        .collect();

    format!(
        "input {name} {{\n{identity_fields}{fields}\n}}",
        name = name,
        identity_fields = identity_fields,
        fields = converter.convert(&input.fields, INDENT),
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::converter::SdlFieldConverter;
    use crate::field::{FieldDescriptor, TemplateInput};

    use super::{selector_input_template, selector_unique_input_template};

    fn stub(fields: &[FieldDescriptor], indent: &str) -> String {
        fields
            .iter()
            .map(|field| format!("{indent}<{}>", field.name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn selector_input() {
        let input = TemplateInput::new(
            "Movie",
            vec![
                FieldDescriptor::new("title", "String"),
                FieldDescriptor::new("year", "Int"),
            ],
        );

        assert_eq!(
            selector_input_template(&input, &SdlFieldConverter),
            "input MovieSelectorInput {
  _and: [MovieSelectorInput]
  _or: [MovieSelectorInput]
  title: String
  year: Int
}"
        );
    }

    #[rstest]
    #[case("Movie")]
    #[case("Post")]
    #[case("")]
    fn selector_input_without_fields(#[case] type_name: &str) {
        let input = TemplateInput::new(type_name, vec![]);
        let sdl = selector_input_template(&input, &SdlFieldConverter);

        assert_eq!(
            sdl,
            format!(
                "input {type_name}SelectorInput {{
  _and: [{type_name}SelectorInput]
  _or: [{type_name}SelectorInput]

}}"
            )
        );
    }

    #[test]
    fn selector_input_uses_injected_converter() {
        let input = TemplateInput::new("Movie", vec![FieldDescriptor::new("title", "String")]);

        assert_eq!(
            selector_input_template(&input, &stub),
            "input MovieSelectorInput {
  _and: [MovieSelectorInput]
  _or: [MovieSelectorInput]
  <title>
}"
        );
    }

    #[test]
    fn unique_selector_input() {
        let input = TemplateInput::new("Movie", vec![FieldDescriptor::new("title", "String")]);

        assert_eq!(
            selector_unique_input_template(&input, &SdlFieldConverter),
            "input MovieSelectorUniqueInput {
  _id: String
  documentId: String # OpenCRUD backwards compatibility
  slug: String
  title: String
}"
        );
    }

    #[rstest]
    #[case::no_fields(vec![])]
    #[case::some_fields(vec![
        FieldDescriptor::new("_id", "ID"),
        FieldDescriptor::new("[tags", "String"),
    ])]
    fn unique_selector_always_has_identity_fields(#[case] fields: Vec<FieldDescriptor>) {
        let input = TemplateInput::new("Movie", fields);
        let sdl = selector_unique_input_template(&input, &stub);

        assert!(sdl.starts_with(
            "input MovieSelectorUniqueInput {
  _id: String
  documentId: String # OpenCRUD backwards compatibility
  slug: String
"
        ));
        assert!(!sdl.contains("_and"));
        assert!(!sdl.contains("_or"));
    }
}
