//! Form field declarations and their editable values

use super::rules::Rule;

/// Mask character for secure fields while hidden
const MASK_CHAR: char = '•';

/// Declaration of a single form field: its key, label and rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the submitted values, unique per form
    pub name: String,
    pub label: String,
    pub placeholder: String,
    /// Checked in declaration order; the first failure is reported
    pub rules: Vec<Rule>,
    /// Password-type field whose visibility can be toggled
    pub secure: bool,
}

impl FieldSpec {
    /// Create a new text field with no rules
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            rules: Vec::new(),
            secure: false,
        }
    }

    /// Create a new password-type field with no rules
    pub fn secure(name: &str, label: &str) -> Self {
        Self {
            secure: true,
            ..Self::text(name, label)
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }
}

/// A declared field together with its current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
    /// Whether a secure field is currently shown in clear text
    pub revealed: bool,
}

impl FormField {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            revealed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Flip clear-text display of a secure field. No-op for plain fields.
    pub fn toggle_visibility(&mut self) {
        if self.spec.secure {
            self.revealed = !self.revealed;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.spec.secure && !self.revealed {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_spec {
        use super::*;

        #[test]
        fn test_text_has_no_rules() {
            let spec = FieldSpec::text("email", "Email");
            assert_eq!(spec.name, "email");
            assert_eq!(spec.label, "Email");
            assert!(spec.rules.is_empty());
            assert!(!spec.secure);
            assert!(!spec.is_required());
        }

        #[test]
        fn test_builder_keeps_rule_order() {
            let spec = FieldSpec::secure("password", "Password")
                .placeholder("Enter your password")
                .rule(Rule::Required)
                .rule(Rule::min_length(6));
            assert!(spec.secure);
            assert!(spec.is_required());
            assert_eq!(spec.placeholder, "Enter your password");
            assert_eq!(spec.rules, vec![Rule::Required, Rule::MinLength(6)]);
        }
    }

    mod form_field {
        use super::*;

        #[test]
        fn test_edit_operations() {
            let mut field = FormField::new(FieldSpec::text("name", "Name"));
            field.push_char('a');
            field.push_char('b');
            assert_eq!(field.as_text(), "ab");
            field.pop_char();
            assert_eq!(field.as_text(), "a");
            field.pop_char();
            assert_eq!(field.as_text(), "");
            field.pop_char();
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_secure_field_is_masked_until_revealed() {
            let mut field = FormField::new(FieldSpec::secure("password", "Password"));
            field.value = "pässword".to_string();
            assert_eq!(field.display_value(), "••••••••");

            field.toggle_visibility();
            assert!(field.revealed);
            assert_eq!(field.display_value(), "pässword");

            field.toggle_visibility();
            assert_eq!(field.display_value(), "••••••••");
        }

        #[test]
        fn test_toggle_visibility_ignored_on_plain_field() {
            let mut field = FormField::new(FieldSpec::text("email", "Email"));
            field.value = "a@b.com".to_string();
            field.toggle_visibility();
            assert!(!field.revealed);
            assert_eq!(field.display_value(), "a@b.com");
        }
    }
}
