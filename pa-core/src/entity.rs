use serde::{Deserialize, Serialize};

/// A user as listed by `/api/v1/users`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,
    pub name: String,
}

/// A month as listed by `/api/v1/months`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Month {
    pub name: String,
}

/// An option offered in a dashboard dropdown.
///
/// `id` is what the detail endpoints are keyed by, `label` is what the
/// user sees.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SelectableEntity {
    pub id: String,
    pub label: String,
}

impl From<User> for SelectableEntity {
    fn from(user: User) -> Self {
        SelectableEntity {
            id: user.user_id.to_string(),
            label: user.name,
        }
    }
}

impl From<Month> for SelectableEntity {
    fn from(month: Month) -> Self {
        SelectableEntity {
            id: month.name.clone(),
            label: month.name,
        }
    }
}

/// Which entity list a dashboard is driven by.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EntityKind {
    User,
    Month,
}

impl EntityKind {
    /// Decode the selector endpoint body into dropdown entities, keeping order.
    pub fn decode_entities(&self, body: &str) -> serde_json::Result<Vec<SelectableEntity>> {
        match self {
            EntityKind::User => {
                let users: Vec<User> = serde_json::from_str(body)?;
                Ok(users.into_iter().map(SelectableEntity::from).collect())
            }
            EntityKind::Month => {
                let months: Vec<Month> = serde_json::from_str(body)?;
                Ok(months.into_iter().map(SelectableEntity::from).collect())
            }
        }
    }
}
