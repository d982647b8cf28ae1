use crate::shared::entity::{Entity, ID};

/// Profile of the owner of `Event`s as found in the user directory
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl User {
    pub fn new(email: Option<String>) -> Self {
        Self {
            id: Default::default(),
            email,
            display_name: None,
        }
    }

    /// The address reminders can be delivered to, if there is one on file
    pub fn deliverable_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
