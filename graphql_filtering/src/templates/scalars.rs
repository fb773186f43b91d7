// SPDX-License-Identifier: AGPL-3.0-or-later

//! Shared input types referenced by the where and ordering input types.
//!
//! Different scalars have different filter capabilities: every scalar can be compared and checked
//! for set membership, `String` can additionally be matched with `_like`.
use crate::constants::{INDENT, ORDER_BY};
use crate::utils::scalar_selector_name;

/// Build the `<scalar>_Selector` input type holding comparison operators for a scalar.
pub fn scalar_selector_template(scalar: &str) -> String {
    let mut operators = vec![
        format!("_eq: {scalar}"),
        format!("_gt: {scalar}"),
        format!("_gte: {scalar}"),
        format!("_in: [{scalar}!]"),
        "_is_null: Boolean".to_owned(),
    ];

    if scalar == "String" {
        operators.push("_like: String".to_owned());
    }

    operators.extend(vec![
        format!("_lt: {scalar}"),
        format!("_lte: {scalar}"),
        format!("_neq: {scalar}"),
        format!("_nin: [{scalar}!]"),
    ]);

    input_block(&scalar_selector_name(scalar, false), &operators)
}

/// Build the `<scalar>_Array_Selector` input type used to filter array fields.
pub fn scalar_array_selector_template(scalar: &str) -> String {
    let operators = vec![
        format!("_contains: {}", scalar_selector_name(scalar, false)),
        format!("_contains_all: [{scalar}!]"),
        "_is_null: Boolean".to_owned(),
    ];

    input_block(&scalar_selector_name(scalar, true), &operators)
}

/// Build the enum specifying the direction of an ordering field.
pub fn order_by_enum_template() -> String {
    format!("enum {ORDER_BY} {{\n{INDENT}asc\n{INDENT}desc\n}}")
}

fn input_block(name: &str, lines: &[String]) -> String {
    let body: String = lines
        .iter()
        .map(|line| format!("{INDENT}{line}\n"))
        .collect();
    format!("input {name} {{\n{body}}}")
}

#[cfg(test)]
mod tests {
    use super::{order_by_enum_template, scalar_array_selector_template, scalar_selector_template};

    #[test]
    fn string_selector() {
        assert_eq!(
            scalar_selector_template("String"),
            "input String_Selector {
  _eq: String
  _gt: String
  _gte: String
  _in: [String!]
  _is_null: Boolean
  _like: String
  _lt: String
  _lte: String
  _neq: String
  _nin: [String!]
}"
        );
    }

    #[test]
    fn only_strings_can_be_matched() {
        assert!(!scalar_selector_template("Int").contains("_like"));
        assert!(!scalar_selector_template("Date").contains("_like"));
        assert!(scalar_selector_template("Date").contains("  _in: [Date!]\n"));
    }

    #[test]
    fn array_selector() {
        assert_eq!(
            scalar_array_selector_template("Int"),
            "input Int_Array_Selector {
  _contains: Int_Selector
  _contains_all: [Int!]
  _is_null: Boolean
}"
        );
    }

    #[test]
    fn order_by_enum() {
        assert_eq!(order_by_enum_template(), "enum OrderBy {\n  asc\n  desc\n}");
    }
}
