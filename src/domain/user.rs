use std::fmt;

/// Actor category. Decides which orders a user sees and which operations apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Farmer,
    Wholesaler,
    Retailer,
    Logistics,
}

impl Role {
    /// Wholesalers and retailers are the buying side of the market.
    pub fn is_buyer(&self) -> bool {
        matches!(self, Role::Wholesaler | Role::Retailer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Farmer => "Farmer",
            Role::Wholesaler => "Wholesaler",
            Role::Retailer => "Retailer",
            Role::Logistics => "Logistics",
        };
        f.write_str(name)
    }
}

/// Represents a registered market participant.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// Payload for registering a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub role: Role,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}
