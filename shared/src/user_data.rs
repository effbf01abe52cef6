//! Test user generation

use uuid::Uuid;

use crate::types::TestUser;

pub const DEFAULT_PASSWORD: &str = "P@ssw0rd!";
pub const EMAIL_DOMAIN: &str = "yopmail.com";

/// Hex digits of the UUID kept in the email; 48 bits keeps 10k users collision-free
const EMAIL_ID_LEN: usize = 12;

/// Fresh user with a random email local part and display name
pub fn generate_unique_user() -> TestUser {
    let unique_id = Uuid::new_v4().simple().to_string();
    TestUser {
        email: format!("testuser_{}@{EMAIL_DOMAIN}", &unique_id[..EMAIL_ID_LEN]),
        password: DEFAULT_PASSWORD.to_string(),
        name: format!("User{}", &unique_id[..5]),
    }
}
