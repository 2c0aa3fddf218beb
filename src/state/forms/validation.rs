//! Whole-form validation

use super::field::FieldSpec;
use std::collections::BTreeMap;

/// Field name → current value
pub type FieldValues = BTreeMap<String, String>;

/// Field name → message. A missing key means the field is valid.
pub type ValidationErrors = BTreeMap<String, String>;

/// Validate every declared field against `values`.
///
/// Each failing field gets exactly one message, taken from its first failing
/// rule in declaration order. Fields absent from `values` are treated as empty.
pub fn validate(specs: &[FieldSpec], values: &FieldValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for spec in specs {
        let value = values.get(&spec.name).map(String::as_str).unwrap_or("");
        if let Some(rule) = spec.rules.iter().find(|rule| !rule.check(value, values)) {
            errors.insert(spec.name.clone(), rule.message(&spec.label, specs));
        }
    }
    errors
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::state::forms::rules::Rule;
    use crate::state::forms::FlowKind;
    use proptest::prelude::*;
    use regex::Regex;

    fn email_specs() -> Vec<FieldSpec> {
        vec![FieldSpec::text("email", "Email")
            .rule(Rule::Required)
            .rule(Rule::Email)]
    }

    fn password_pair_specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::secure("password", "Password").rule(Rule::Required),
            FieldSpec::secure("confirmPassword", "Confirm Password")
                .rule(Rule::Required)
                .rule(Rule::equals_field("password")),
        ]
    }

    fn single(name: &str, value: &str) -> FieldValues {
        FieldValues::from([(name.to_string(), value.to_string())])
    }

    fn register_values() -> impl Strategy<Value = FieldValues> {
        let names: Vec<String> = FlowKind::Register
            .fields()
            .into_iter()
            .map(|spec| spec.name)
            .collect();
        proptest::collection::vec(".{0,12}", names.len()).prop_map(move |raw| {
            names.iter().cloned().zip(raw).collect::<FieldValues>()
        })
    }

    proptest! {
        #[test]
        fn test_blank_required_field_always_errors(blank in "[ \t]{0,6}", password in ".*") {
            let specs = FlowKind::Login.fields();
            let mut values = single("email", &blank);
            values.insert("password".to_string(), password);
            let errors = validate(&specs, &values);
            prop_assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
        }

        #[test]
        fn test_email_error_agrees_with_pattern(value in "\\PC{1,24}") {
            let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
            prop_assume!(!value.trim().is_empty());
            let errors = validate(&email_specs(), &single("email", &value));
            let flagged = errors.get("email").map(String::as_str) == Some("Invalid email format");
            prop_assert_eq!(flagged, !pattern.is_match(&value));
        }

        #[test]
        fn test_well_formed_addresses_pass(
            value in "[a-z0-9.+_-]{1,10}@[a-z0-9-]{1,10}\\.[a-z]{2,6}",
        ) {
            prop_assert!(validate(&email_specs(), &single("email", &value)).is_empty());
        }

        #[test]
        fn test_unequal_passwords_mismatch(
            password in "[a-zA-Z0-9]{6,12}",
            confirm in "[a-zA-Z0-9]{6,12}",
        ) {
            let mut values = single("password", &password);
            values.insert("confirmPassword".to_string(), confirm.clone());
            let errors = validate(&password_pair_specs(), &values);
            let mismatch = errors.get("confirmPassword").map(String::as_str)
                == Some("Confirm Password does not match Password");
            prop_assert_eq!(mismatch, password != confirm);
        }

        #[test]
        fn test_equal_passwords_never_mismatch(password in "[a-zA-Z0-9]{6,12}") {
            let mut values = single("password", &password);
            values.insert("confirmPassword".to_string(), password);
            prop_assert!(validate(&password_pair_specs(), &values).is_empty());
        }

        #[test]
        fn test_validate_is_idempotent(values in register_values()) {
            let specs = FlowKind::Register.fields();
            let first = validate(&specs, &values);
            let second = validate(&specs, &values);
            prop_assert_eq!(first, second);
        }
    }
}
