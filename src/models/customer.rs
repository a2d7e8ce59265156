use chrono::{DateTime, Utc};

use crate::models::NationalId;

/// The authoritative record of a customer
///
/// `id` and `created_at` are assigned by the repository when the customer is
/// written, anything set before that is discarded. An unsaved customer holds
/// an empty id and the epoch as placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub national_id: NationalId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// A customer that has not been persisted yet
    pub fn unsaved(national_id: NationalId, name: String, email: String) -> Self {
        Self {
            id: String::new(),
            national_id,
            name,
            email,
            created_at: DateTime::<Utc>::default(),
        }
    }
}
