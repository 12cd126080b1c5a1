use serde::Deserialize;

/// Body of `GET /login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub logged_in: bool,
    pub change_log_in_status_url: String,
}

/// Body of `GET /person`. Only the fields the page shows are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
}

impl UserProfile {
    pub fn greeting(&self) -> String {
        if self.first_name.is_empty() {
            format!("Welcome, {}", self.email)
        } else {
            format!("Welcome, {}", self.first_name)
        }
    }
}

/// `None` when the person has not registered yet: an empty body, `null`, or a
/// profile with neither name nor email.
pub fn parse_profile(body: &str) -> Result<Option<UserProfile>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let profile: Option<UserProfile> = serde_json::from_str(body)?;
    Ok(profile.filter(|p| !(p.first_name.is_empty() && p.email.is_empty())))
}
