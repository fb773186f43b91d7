// SPDX-License-Identifier: AGPL-3.0-or-later

//! Input types used when specifying ordering parameters.
use log::debug;

use crate::config::TemplateOptions;
use crate::constants::{INDENT, ORDER_BY, ORDER_BY_PLACEHOLDER_FIELDS};
use crate::field::TemplateInput;
use crate::utils::order_by_input_name;

/// Build the ordering input type, one `OrderBy` field for every field of the type.
///
/// Unlike the where input type no fields are skipped, any field can be ordered by.
pub fn field_order_by_input_template(input: &TemplateInput, options: &TemplateOptions) -> String {
    let name = order_by_input_name(&input.type_name);
    debug!("Building ordering input type {}", name);

    let placeholders: String = if options.order_by_placeholders {
        ORDER_BY_PLACEHOLDER_FIELDS
            .iter()
            .map(|field| format!("{INDENT}{field}: {ORDER_BY}\n"))
            .collect()
    } else {
        String::new()
    };

    let fields = input
        .fields
        .iter()
        .map(|field| format!("{}: {ORDER_BY}", field.name))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "input {name} {{\n{placeholders}{INDENT}{fields}\n}}",
        name = name,
        placeholders = placeholders,
        fields = fields,
    )
}
