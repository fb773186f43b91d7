// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

/// Errors when selecting templates by name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template name did not match any known template.
    #[error("Unknown template '{0}', expected one of: selector, selector_unique, where, order_by")]
    UnknownTemplate(String),
}
