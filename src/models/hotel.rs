use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub address: String,
    pub is_active: bool,
    pub facilities: Vec<Facility>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Facility {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}
