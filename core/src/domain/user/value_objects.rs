#[derive(Debug, Clone)]
pub struct UpdateProfileInput {
    pub first_name: String,
    pub last_name: String,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateNotificationSettingsInput {
    pub enabled: Option<bool>,
    pub urgent_days: Option<i32>,
    pub warning_days: Option<i32>,
}
