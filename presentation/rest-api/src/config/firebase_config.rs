use anyhow::Context;

pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            project_id: std::env::var("FIREBASE_PROJECT_ID")
                .context("FIREBASE_PROJECT_ID must be set")?,
        })
    }

    /// Issuer every valid ID token for this project carries.
    pub fn expected_issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}
