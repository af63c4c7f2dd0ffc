//! Customer domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A rental customer. The id is chosen by the client and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Client-assigned identifier
    #[schema(example = "C1")]
    pub id: String,
    /// Full name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Phone number, email or any other contact detail
    #[schema(example = "555-0100")]
    pub contact: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }
}
