use diascreen_core::models::profile::UserProfile;

/// Landing screen after login. Read-only view of the signed-in user.
#[derive(Debug, Clone)]
pub struct DashboardScreen {
    user: UserProfile,
}

impl DashboardScreen {
    pub fn new(user: UserProfile) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn greeting(&self) -> String {
        let name = if self.user.first_name.is_empty() {
            "User"
        } else {
            self.user.first_name.as_str()
        };
        format!("Welcome {name}!")
    }

    /// Label/value rows for the profile card.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Email", self.user.email.clone()),
            ("Gender", self.user.gender.label().to_string()),
            ("Age", self.user.age.to_string()),
            ("Nationality", self.user.nationality.clone()),
        ]
    }
}
