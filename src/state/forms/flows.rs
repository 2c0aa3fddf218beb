//! Field declarations for the login, register and recover screens

use super::field::FieldSpec;
use super::rules::Rule;
use super::validation::FieldValues;
use serde::{Deserialize, Serialize};

/// Minimum password length for new accounts
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The authentication flows backed by a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Login,
    Register,
    Recover,
}

impl FlowKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Recover => "Recover Password",
        }
    }

    /// Label of the submit control
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Signup",
            Self::Recover => "Recover Password",
        }
    }

    /// Declared fields in display order
    pub fn fields(&self) -> Vec<FieldSpec> {
        match self {
            Self::Login => vec![
                email_field(),
                FieldSpec::secure("password", "Password")
                    .placeholder("Enter your password")
                    .rule(Rule::Required),
            ],
            Self::Register => vec![
                FieldSpec::text("name", "Name")
                    .placeholder("Enter your name")
                    .rule(Rule::Required),
                email_field(),
                FieldSpec::text("phone", "Phone Number").placeholder("Enter your phone number"),
                FieldSpec::text("birthday", "Birthday (MM-DD-YYYY)")
                    .placeholder("Enter your birthday")
                    .rule(Rule::date("%m-%d-%Y", "MM-DD-YYYY")),
                FieldSpec::secure("password", "Password")
                    .placeholder("Enter your password")
                    .rule(Rule::Required)
                    .rule(Rule::min_length(MIN_PASSWORD_LENGTH)),
                FieldSpec::secure("confirmPassword", "Confirm Password")
                    .placeholder("Confirm your password")
                    .rule(Rule::Required)
                    .rule(Rule::equals_field("password")),
            ],
            Self::Recover => vec![email_field()],
        }
    }

    /// Message shown once the simulated request succeeds
    pub fn success_message(&self, values: &FieldValues) -> String {
        let email = values.get("email").map(String::as_str).unwrap_or_default();
        match self {
            Self::Login => format!("Signed in as {email}"),
            Self::Register => "Account created, you can now log in".to_string(),
            Self::Recover => format!("Recovery instructions sent to {email}"),
        }
    }
}

impl std::fmt::Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

fn email_field() -> FieldSpec {
    FieldSpec::text("email", "Email")
        .placeholder("Enter your email")
        .rule(Rule::Required)
        .rule(Rule::Email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(flow: FlowKind) -> Vec<String> {
        flow.fields().into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_login_fields() {
        assert_eq!(names(FlowKind::Login), vec!["email", "password"]);
        assert!(FlowKind::Login.fields().iter().all(|f| f.is_required()));
    }

    #[test]
    fn test_register_fields() {
        assert_eq!(
            names(FlowKind::Register),
            vec![
                "name",
                "email",
                "phone",
                "birthday",
                "password",
                "confirmPassword"
            ]
        );
        let secure: Vec<_> = FlowKind::Register
            .fields()
            .into_iter()
            .filter(|f| f.secure)
            .map(|f| f.name)
            .collect();
        assert_eq!(secure, vec!["password", "confirmPassword"]);
    }

    #[test]
    fn test_recover_fields() {
        assert_eq!(names(FlowKind::Recover), vec!["email"]);
    }

    #[test]
    fn test_field_names_unique_per_flow() {
        for flow in [FlowKind::Login, FlowKind::Register, FlowKind::Recover] {
            let mut all = names(flow);
            let count = all.len();
            all.sort();
            all.dedup();
            assert_eq!(all.len(), count, "{flow}");
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&FlowKind::Recover).unwrap(),
            "\"recover\""
        );
        let parsed: FlowKind = serde_json::from_str("\"login\"").unwrap();
        assert_eq!(parsed, FlowKind::Login);
    }

    #[test]
    fn test_success_message_mentions_email() {
        let mut values = FieldValues::new();
        values.insert("email".to_string(), "a@b.com".to_string());
        assert_eq!(
            FlowKind::Recover.success_message(&values),
            "Recovery instructions sent to a@b.com"
        );
    }
}
