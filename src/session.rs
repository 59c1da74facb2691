use crate::errors::FormError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The signed-in user. Nothing is verified, signing in only gates the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(_) => !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

impl Credentials {
    pub fn validate(&self) -> Result<(), FormError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    pub fn sign_in(self) -> Result<Session, FormError> {
        self.validate()?;
        Ok(Session {
            email: self.email.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn signs_in_with_any_password() {
        let session = credentials(" riya@example.com ", "hunter2").sign_in().unwrap();
        assert_eq!(session.email, "riya@example.com");
    }

    #[test]
    fn both_fields_are_required() {
        assert_eq!(
            credentials("", "secret").validate(),
            Err(FormError::MissingCredentials)
        );
        assert_eq!(
            credentials("   ", "secret").validate(),
            Err(FormError::MissingCredentials)
        );
        assert_eq!(
            credentials("riya@example.com", "").validate(),
            Err(FormError::MissingCredentials)
        );
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "riya",
            "@example.com",
            "riya@",
            "riya@example",
            "riya@.com",
            "riya@example.",
            "ri ya@example.com",
            "riya@@example.com",
        ] {
            assert_eq!(
                credentials(email, "secret").validate(),
                Err(FormError::InvalidEmail),
                "{email}"
            );
        }
    }
}
