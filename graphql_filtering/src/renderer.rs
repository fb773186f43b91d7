// SPDX-License-Identifier: AGPL-3.0-or-later

use log::{debug, info};

use crate::config::TemplateOptions;
use crate::converter::{FieldConverter, SdlFieldConverter};
use crate::field::TemplateInput;
use crate::templates::{
    field_order_by_input_template, field_where_input_template, order_by_enum_template,
    scalar_array_selector_template, scalar_selector_template, selector_input_template,
    selector_unique_input_template, TemplateKind,
};

/// Separator between type definitions of a rendered document.
const DEFINITION_SEPARATOR: &str = "\n\n";

/// Bundles a field converter with template options to render input types for many types.
#[derive(Debug, Clone)]
pub struct FilteringTemplates<C = SdlFieldConverter> {
    converter: C,
    options: TemplateOptions,
}

impl Default for FilteringTemplates {
    fn default() -> Self {
        Self::with_options(TemplateOptions::default())
    }
}

impl FilteringTemplates<SdlFieldConverter> {
    /// Returns templates using the default field converter.
    pub fn with_options(options: TemplateOptions) -> Self {
        Self::new(SdlFieldConverter, options)
    }
}

impl<C: FieldConverter> FilteringTemplates<C> {
    /// Returns templates using the given field converter and options.
    pub fn new(converter: C, options: TemplateOptions) -> Self {
        Self { converter, options }
    }

    /// Options these templates were configured with.
    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    /// Render the `<Type>SelectorInput` input type.
    pub fn selector_input(&self, input: &TemplateInput) -> String {
        selector_input_template(input, &self.converter)
    }

    /// Render the `<Type>SelectorUniqueInput` input type.
    pub fn selector_unique_input(&self, input: &TemplateInput) -> String {
        selector_unique_input_template(input, &self.converter)
    }

    /// Render the `<Type>WhereInput` input type.
    pub fn where_input(&self, input: &TemplateInput) -> String {
        field_where_input_template(input, &self.options)
    }

    /// Render the `<Type>OrderByInput` input type.
    pub fn order_by_input(&self, input: &TemplateInput) -> String {
        field_order_by_input_template(input, &self.options)
    }

    /// Render a single input type.
    pub fn render(&self, kind: TemplateKind, input: &TemplateInput) -> String {
        match kind {
            TemplateKind::Selector => self.selector_input(input),
            TemplateKind::SelectorUnique => self.selector_unique_input(input),
            TemplateKind::Where => self.where_input(input),
            TemplateKind::OrderBy => self.order_by_input(input),
        }
    }

    /// Render the given input types for one type, separated by an empty line.
    pub fn render_all(&self, input: &TemplateInput, kinds: &[TemplateKind]) -> String {
        debug!(
            "Rendering {} input types for {}",
            kinds.len(),
            input.type_name
        );

        kinds
            .iter()
            .map(|kind| self.render(*kind, input))
            .collect::<Vec<String>>()
            .join(DEFINITION_SEPARATOR)
    }

    /// Render the scalar selectors of all supported field types and the `OrderBy` enum.
    ///
    /// These are the types referenced by where and ordering input types.
    pub fn render_shared_types(&self) -> String {
        let supported = &self.options.supported_field_types;
        info!(
            "Rendering shared selector types for {} supported field types",
            supported.len()
        );

        let mut definitions = Vec::with_capacity(supported.len() * 2 + 1);
        for scalar in supported.iter() {
            definitions.push(scalar_selector_template(scalar));
            definitions.push(scalar_array_selector_template(scalar));
        }
        definitions.push(order_by_enum_template());

        definitions.join(DEFINITION_SEPARATOR)
    }
}
