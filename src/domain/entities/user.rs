use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Company {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
    pub address: Address,
}

impl User {
    pub fn row_key(&self) -> String {
        format!("{}-{}", self.id, self.name)
    }

    pub fn searchable_fields(&self) -> [&str; 2] {
        [&self.name, &self.email]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKey {
    Name,
    Username,
    Email,
    Website,
}

impl UserKey {
    pub const ALL: [UserKey; 4] = [
        UserKey::Name,
        UserKey::Username,
        UserKey::Email,
        UserKey::Website,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserKey::Name => "Name",
            UserKey::Username => "Username",
            UserKey::Email => "Email",
            UserKey::Website => "Website",
        }
    }

    pub fn field_of(self, user: &User) -> &str {
        match self {
            UserKey::Name => &user.name,
            UserKey::Username => &user.username,
            UserKey::Email => &user.email,
            UserKey::Website => &user.website,
        }
    }
}
