//! Factory functions for generating mock database models.
//!
//! Pure functions producing models with standard test values, no database interaction.

/// Email derived from a username for mock users
pub fn mock_email(username: &str) -> String {
    format!("{}@rebel.org", username.to_lowercase())
}

/// Create a mock user model, the password is always `"password"`.
pub fn mock_user_model(id: i32, username: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        email: mock_email(username),
        username: username.to_string(),
        password: "password".to_string(),
        is_active: true,
    }
}

pub fn mock_character_model(id: i32, name: &str) -> entity::character::Model {
    entity::character::Model {
        id,
        name: name.to_string(),
        birth_year: "19BBY".to_string(),
        hair_color: "brown".to_string(),
        gender: "female".to_string(),
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        population: "200000".to_string(),
        climate: "arid".to_string(),
        terrain: "desert".to_string(),
    }
}
