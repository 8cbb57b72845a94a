use serde::{Deserialize, Serialize};

/// Identifier of a user record.
///
/// Distinct among the records a store holds at any moment. Ids come from the current
/// maximum, so once the highest id is deleted it can be handed out again.
pub type UserId = u64;

/// A user record as served by the users endpoint.
///
/// The endpoint carries more fields (address, company, website); only the ones
/// the roster edits are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

/// The editable fields of a [`User`], used for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFormData {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl UserFormData {
    pub(crate) fn into_user(self, id: UserId) -> User {
        let Self {
            name,
            username,
            email,
            phone,
        } = self;

        User {
            id,
            name,
            username,
            email,
            phone,
        }
    }
}

impl User {
    /// Overwrite the editable fields, keeping the identifier.
    pub(crate) fn apply(&mut self, data: UserFormData) {
        self.name = data.name;
        self.username = data.username;
        self.email = data.email;
        self.phone = data.phone;
    }
}
