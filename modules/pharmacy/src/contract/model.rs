use serde::{Deserialize, Serialize};
use synckit::Resource;

/// A catalog product as the backend serves it. The id is
/// server-assigned and unique within a collection; the price is never
/// negative once it has passed draft validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Reference to a displayable image, typically a URL.
    pub image: String,
}

impl Resource for Product {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// A roster user as the backend serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl Resource for User {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
