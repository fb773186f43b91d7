// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::{bail, Result};
use graphql_filtering::FilteringTemplates;
use log::{debug, info};

use crate::config::ConfigFile;

/// Render the SDL document for all configured types.
///
/// Shared selector types come first when enabled, followed by the input types of every type in
/// the order they were defined.
pub fn render_document(config: &ConfigFile) -> Result<String> {
    if config.types.is_empty() {
        bail!("No type definitions found, add at least one [[types]] table to the config file");
    }

    let templates = FilteringTemplates::with_options(config.template_options());
    let mut definitions = Vec::with_capacity(config.types.len() + 1);

    if config.shared_types {
        definitions.push(templates.render_shared_types());
    }

    for input in &config.types {
        debug!(
            "Rendering {} for type {} with {} fields",
            config
                .templates
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<String>>()
                .join(", "),
            input.type_name,
            input.fields.len()
        );
        definitions.push(templates.render_all(input, &config.templates));
    }

    info!("Rendered input types for {} types", config.types.len());

    Ok(definitions.join("\n\n") + "\n")
}

#[cfg(test)]
mod tests {
    use graphql_filtering::{FieldDescriptor, TemplateInput, TemplateKind};

    use crate::config::ConfigFile;

    use super::render_document;

    fn config(templates: Vec<TemplateKind>, types: Vec<TemplateInput>) -> ConfigFile {
        ConfigFile {
            templates,
            types,
            ..ConfigFile::default()
        }
    }

    #[test]
    fn requires_type_definitions() {
        assert!(render_document(&ConfigFile::default()).is_err());
    }

    #[test]
    fn renders_types_in_order() {
        let config = config(
            vec![TemplateKind::OrderBy],
            vec![
                TemplateInput::new("Movie", vec![FieldDescriptor::new("title", "String")]),
                TemplateInput::new("Person", vec![FieldDescriptor::new("name", "String")]),
            ],
        );

        assert_eq!(
            render_document(&config).unwrap(),
            "input MovieOrderByInput {
  foo: OrderBy
  bar: OrderBy
  title: OrderBy
}

input PersonOrderByInput {
  foo: OrderBy
  bar: OrderBy
  name: OrderBy
}
"
        );
    }

    #[test]
    fn shared_types_come_first() {
        let config = ConfigFile {
            shared_types: true,
            ..config(
                vec![TemplateKind::Where],
                vec![TemplateInput::new("Movie", vec![])],
            )
        };

        let document = render_document(&config).unwrap();
        assert!(document.starts_with("input String_Selector {"));
        assert!(document.contains("enum OrderBy {"));
        assert!(document.ends_with("input MovieWhereInput {
  _and: [MovieWhereInput]
  _not: MovieWhereInput
  _or: [MovieWhereInput]
  # will search across all searchable fields at the same time
  search: String
  \n}\n"));
    }
}
