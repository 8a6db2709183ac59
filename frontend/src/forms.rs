use std::sync::OnceLock;

use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter your full name",
            Field::Email => "Email Address",
            Field::Message => "Describe your project goals and technical requirements...",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Success,
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.email = Some("Please enter a valid email address".to_string());
        }
        if self.message.trim().is_empty() {
            errors.message = Some("Message is required".to_string());
        }
        errors
    }
}

/// Floating label is raised while focused or when the field has content.
pub fn label_active(focused: Option<Field>, form: &ContactForm, field: Field) -> bool {
    focused == Some(field) || !form.value(field).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Nadia".to_string(),
            email: "nadia@example.com".to_string(),
            message: "We need an app.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_blank_fields_are_required() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: String::new(),
            message: "\n".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_email_format() {
        for bad in ["nadia", "nadia@", "nadia@example", "na dia@example.com", "@example.com"] {
            let mut form = filled();
            form.email = bad.to_string();
            assert_eq!(
                form.validate().get(Field::Email),
                Some("Please enter a valid email address"),
                "{}",
                bad
            );
        }
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn test_clearing_one_error_keeps_others() {
        let mut errors = ContactForm::default().validate();
        errors.clear(Field::Email);
        assert!(errors.get(Field::Email).is_none());
        assert!(errors.get(Field::Name).is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_label_active() {
        let mut form = ContactForm::default();
        assert!(!label_active(None, &form, Field::Name));
        assert!(label_active(Some(Field::Name), &form, Field::Name));
        assert!(!label_active(Some(Field::Email), &form, Field::Name));
        form.set(Field::Name, "N".to_string());
        assert!(label_active(None, &form, Field::Name));
    }
}
