use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("please fill in your {}", .0.label())]
    MissingField(Field),
    #[error("that email address doesn't look right")]
    InvalidEmail,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in Field::ALL {
            if self.field(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        match self.email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    pub fn subject_line(&self) -> String {
        format!("[Portfolio] {}: {}", self.subject.trim(), self.name.trim())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\r\nEmail: {}\r\n\r\nMessage:\r\n{}",
            self.name.trim(),
            self.email.trim(),
            self.message
        )
    }

    /// Mail-client deep link carrying the composed subject and body.
    pub fn mailto(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject_line()),
            urlencoding::encode(&self.body())
        ))
    }
}
