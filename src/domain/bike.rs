//! Bike domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A rentable bike. The id is chosen by the client and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Bike {
    /// Client-assigned identifier
    #[schema(example = "B1")]
    pub id: String,
    /// Bike model name
    #[schema(example = "Roadster")]
    pub model: String,
}

impl Bike {
    pub fn new(id: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
        }
    }
}
