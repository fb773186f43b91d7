// SPDX-License-Identifier: AGPL-3.0-or-later

//! Naming helpers for the generated input types.
use crate::constants::{
    ARRAY_INFIX, ORDER_BY_INPUT_SUFFIX, SELECTOR_INPUT_SUFFIX, SELECTOR_SUFFIX,
    SELECTOR_UNIQUE_INPUT_SUFFIX, WHERE_INPUT_SUFFIX,
};

/// Correctly formats the name of a selector input type.
pub fn selector_input_name(type_name: &str) -> String {
    format!("{type_name}{SELECTOR_INPUT_SUFFIX}")
}

/// Correctly formats the name of a unique selector input type.
pub fn selector_unique_input_name(type_name: &str) -> String {
    format!("{type_name}{SELECTOR_UNIQUE_INPUT_SUFFIX}")
}

/// Correctly formats the name of a where input type.
pub fn where_input_name(type_name: &str) -> String {
    format!("{type_name}{WHERE_INPUT_SUFFIX}")
}

/// Correctly formats the name of an ordering input type.
pub fn order_by_input_name(type_name: &str) -> String {
    format!("{type_name}{ORDER_BY_INPUT_SUFFIX}")
}

/// Name of the filter input type for a scalar, `String_Selector` or `String_Array_Selector`.
pub fn scalar_selector_name(scalar: &str, is_array: bool) -> String {
    if is_array {
        format!("{scalar}_{ARRAY_INFIX}_{SELECTOR_SUFFIX}")
    } else {
        format!("{scalar}_{SELECTOR_SUFFIX}")
    }
}
