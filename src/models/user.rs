use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)] // Stored as plaintext, never returned
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// User creation DTO (without id)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl User {
    pub fn from_new(id: i32, input: NewUser) -> Self {
        Self {
            id,
            username: input.username,
            password: input.password,
            email: input.email,
            full_name: input.full_name,
        }
    }
}
