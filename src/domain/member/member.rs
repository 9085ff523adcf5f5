//! Member aggregate.
//!
//! A member record is created exactly once per successful registration and is
//! append-only from the registrant's perspective; afterwards only an
//! authorized editor may change it, and it is never deleted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, Timestamp, ValidationError};

/// A registered member of the association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub instrument: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub tefa: Option<String>,
    pub terms_version: String,
    pub terms_accepted: bool,
    pub submitted_at: Timestamp,
}

/// Profile data supplied by the registrant alongside the invite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub name: String,
    pub instrument: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub tefa: Option<String>,
    pub terms_version: String,
    pub terms_accepted: bool,
}

/// Partial update applied by an authorized editor. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub instrument: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub tefa: Option<String>,
}

impl Member {
    /// Creates a member from a validated registration profile.
    pub fn register(profile: MemberProfile) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("name", &profile.name),
            ("instrument", &profile.instrument),
            ("email", &profile.email),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        if !profile.email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        if !profile.terms_accepted {
            return Err(ValidationError::invalid_format(
                "terms_accepted",
                "terms must be accepted to register",
            ));
        }

        Ok(Self {
            id: MemberId::new(),
            name: profile.name,
            instrument: profile.instrument,
            email: profile.email,
            city: profile.city,
            state: profile.state,
            phone: profile.phone,
            tefa: profile.tefa,
            terms_version: profile.terms_version,
            terms_accepted: profile.terms_accepted,
            submitted_at: Timestamp::now(),
        })
    }

    /// Applies a partial update from an authorized editor.
    ///
    /// Identity, terms acceptance, and the submission timestamp are not
    /// editable.
    pub fn apply_update(&mut self, update: MemberUpdate) -> Result<(), ValidationError> {
        if let Some(email) = &update.email {
            if !email.contains('@') {
                return Err(ValidationError::invalid_format("email", "missing @ symbol"));
            }
        }
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(instrument) = update.instrument {
            self.instrument = instrument;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(tefa) = update.tefa {
            self.tefa = Some(tefa);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn test_profile() -> MemberProfile {
        MemberProfile {
            name: "Joana Alves".to_string(),
            instrument: "trompete".to_string(),
            email: "joana@example.com".to_string(),
            city: "Recife".to_string(),
            state: "PE".to_string(),
            phone: "+55 81 99999-0000".to_string(),
            tefa: None,
            terms_version: "2025-01".to_string(),
            terms_accepted: true,
        }
    }

    #[test]
    fn register_creates_member_with_fresh_id() {
        let a = Member::register(test_profile()).unwrap();
        let b = Member::register(test_profile()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Joana Alves");
    }

    #[test]
    fn register_requires_core_fields() {
        let mut profile = test_profile();
        profile.name = "  ".to_string();
        assert!(Member::register(profile).is_err());

        let mut profile = test_profile();
        profile.email = "not-an-email".to_string();
        assert!(Member::register(profile).is_err());
    }

    #[test]
    fn register_requires_terms_acceptance() {
        let mut profile = test_profile();
        profile.terms_accepted = false;
        assert!(Member::register(profile).is_err());
    }

    #[test]
    fn apply_update_changes_only_provided_fields() {
        let mut member = Member::register(test_profile()).unwrap();
        let before = member.clone();

        member
            .apply_update(MemberUpdate {
                instrument: Some("bombardino".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(member.instrument, "bombardino");
        assert_eq!(member.name, before.name);
        assert_eq!(member.email, before.email);
        assert_eq!(member.submitted_at, before.submitted_at);
    }

    #[test]
    fn apply_update_validates_email() {
        let mut member = Member::register(test_profile()).unwrap();
        let result = member.apply_update(MemberUpdate {
            email: Some("broken".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(member.email, "joana@example.com");
    }
}
