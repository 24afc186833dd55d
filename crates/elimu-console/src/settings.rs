// SPDX-License-Identifier: Apache-2.0

//! The settings page, canonical variant: admin profile, password change, and
//! college info, validated locally and persisted next to the session file.
//! Nothing here reaches the server; this mirrors the original page, which
//! only ever mutated its own form state.

use elimu_model::{required, EmailAddress, NAME_MAX_LEN, PHONE_MAX_LEN};
use elimu_api::FieldError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollegeInfo {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Notifications {
    pub on_new_registration: bool,
    pub on_new_message: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub profile: Profile,
    pub college: CollegeInfo,
    pub notifications: Notifications,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: Profile {
                username: "admin".to_string(),
                email: "leadershipjoycepcentre@gmail.com".to_string(),
                full_name: "College Administrator".to_string(),
                phone: "0727 708 240".to_string(),
            },
            college: CollegeInfo {
                name: "Elimu Campus".to_string(),
                tagline: "Vocational training and counselling".to_string(),
                phone: "0727 708 240 / 0732 522 089".to_string(),
                email: "leadershipjoycepcentre@gmail.com".to_string(),
                location: "Kitengela, Kenya".to_string(),
            },
            notifications: Notifications {
                on_new_registration: true,
                on_new_message: true,
            },
        }
    }
}

pub fn validate_profile(profile: &Profile) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Err(e) = required("username", &profile.username, NAME_MAX_LEN) {
        errors.push(FieldError::new(e.field(), e.to_string()));
    }
    if let Err(e) = EmailAddress::parse(&profile.email) {
        errors.push(FieldError::new(e.field(), e.to_string()));
    }
    if let Err(e) = required("fullName", &profile.full_name, NAME_MAX_LEN) {
        errors.push(FieldError::new(e.field(), e.to_string()));
    }
    if let Err(e) = required("phone", &profile.phone, PHONE_MAX_LEN) {
        errors.push(FieldError::new(e.field(), e.to_string()));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Local-only password form check: the demo has no credential storage, so
/// this validates shape and confirmation match, nothing else.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if current.is_empty() {
        errors.push(FieldError::new("currentPassword", "current password is required"));
    }
    if new.len() < PASSWORD_MIN_LEN {
        errors.push(FieldError::new(
            "newPassword",
            format!("new password must be at least {PASSWORD_MIN_LEN} characters"),
        ));
    }
    if new != confirm {
        errors.push(FieldError::new("confirmPassword", "passwords do not match"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("settings.json"),
        }
    }

    #[must_use]
    pub fn load(&self) -> Settings {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, settings: &Settings) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_change_requires_matching_confirmation() {
        validate_password_change("old", "longenough", "longenough").expect("valid change");

        let errors =
            validate_password_change("old", "longenough", "different").expect_err("mismatch");
        assert_eq!(errors[0].field, "confirmPassword");

        let errors = validate_password_change("", "short", "short").expect_err("short + empty");
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["currentPassword", "newPassword"]);
    }

    #[test]
    fn profile_validation_checks_email_format() {
        let mut profile = Settings::default().profile;
        validate_profile(&profile).expect("default profile valid");

        profile.email = "nope".to_string();
        let errors = validate_profile(&profile).expect_err("bad email");
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::new(dir.path());
        assert_eq!(store.load(), Settings::default());

        let mut settings = Settings::default();
        settings.college.tagline = "New tagline".to_string();
        settings.notifications.on_new_message = false;
        store.save(&settings).expect("save");
        assert_eq!(store.load(), settings);
    }
}
