// SPDX-License-Identifier: AGPL-3.0-or-later

//! Fixed type name suffixes and field lines used in the generated SDL.

/// Suffix of the input type used to query for one or more documents.
pub const SELECTOR_INPUT_SUFFIX: &str = "SelectorInput";

/// Suffix of the input type used to query for exactly one document.
pub const SELECTOR_UNIQUE_INPUT_SUFFIX: &str = "SelectorUniqueInput";

/// Suffix of the input type holding per-field filters.
pub const WHERE_INPUT_SUFFIX: &str = "WhereInput";

/// Suffix of the input type holding per-field ordering.
pub const ORDER_BY_INPUT_SUFFIX: &str = "OrderByInput";

/// Suffix of a scalar filter input type.
pub const SELECTOR_SUFFIX: &str = "Selector";

/// Infix marking a scalar filter input type for array fields.
pub const ARRAY_INFIX: &str = "Array";

/// Name of the enum used to specify an ordering direction.
pub const ORDER_BY: &str = "OrderBy";

/// Indentation of field lines inside a type definition.
pub const INDENT: &str = "  ";

/// Placeholder fields emitted at the top of every ordering input type.
pub const ORDER_BY_PLACEHOLDER_FIELDS: [&str; 2] = ["foo", "bar"];

/// Identity fields of a unique selector, in order.
pub const UNIQUE_SELECTOR_FIELDS: [&str; 3] = [
    "_id: String",
    "documentId: String # OpenCRUD backwards compatibility",
    "slug: String",
];

/// Comment line above the `search` field of a where input type.
pub const SEARCH_COMMENT: &str = "# will search across all searchable fields at the same time";
