// SPDX-License-Identifier: AGPL-3.0-or-later

//! # graphql_filtering
//!
//! SDL templates generating the selector, unique selector, where and ordering input types for a
//! GraphQL object type from a list of field descriptors.
//!
//! ```
//! use graphql_filtering::{FieldDescriptor, FilteringTemplates, TemplateInput, TemplateOptions};
//!
//! let templates = FilteringTemplates::with_options(TemplateOptions::default());
//! let input = TemplateInput::new("Movie", vec![FieldDescriptor::new("title", "String")]);
//! let sdl = templates.where_input(&input);
//! assert!(sdl.contains("title: String_Selector"));
//! ```
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod config;
pub mod constants;
mod converter;
mod errors;
mod field;
mod renderer;
pub mod templates;
pub mod utils;


pub use crate::config::{SupportedFieldTypes, TemplateOptions, DEFAULT_SUPPORTED_FIELD_TYPES};
pub use crate::converter::{FieldConverter, SdlFieldConverter};
pub use crate::errors::TemplateError;
pub use crate::field::{FieldDescriptor, TemplateInput, ARRAY_FIELD_PREFIX};
pub use crate::renderer::FilteringTemplates;
pub use crate::templates::TemplateKind;
