use diascreen_core::models::profile::UserProfile;

/// Who is signed in on this device. Lives only in memory.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<UserProfile>,
    signed_in_at: Option<jiff::Timestamp>,
}

impl Session {
    pub fn sign_in(&mut self, user: UserProfile) {
        self.user = Some(user);
        self.signed_in_at = Some(jiff::Timestamp::now());
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.signed_in_at = None;
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn signed_in_at(&self) -> Option<jiff::Timestamp> {
        self.signed_in_at
    }
}
