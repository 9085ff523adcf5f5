//! JSON DTOs for the public registration endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::member::{Member, MemberProfile};

/// Registration request: the invite key plus the registrant's profile.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterMemberRequest {
    pub invite_key: String,
    pub name: String,
    pub instrument: String,
    pub email: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub tefa: Option<String>,
    pub terms_version: String,
    pub terms_accepted: bool,
}

impl RegisterMemberRequest {
    pub fn into_parts(self) -> (String, MemberProfile) {
        let profile = MemberProfile {
            name: self.name,
            instrument: self.instrument,
            email: self.email,
            city: self.city,
            state: self.state,
            phone: self.phone,
            tefa: self.tefa,
            terms_version: self.terms_version,
            terms_accepted: self.terms_accepted,
        };
        (self.invite_key, profile)
    }
}

/// Registration response: the created member's public identity.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterMemberResponse {
    pub id: String,
    pub name: String,
    pub submitted_at: String,
}

impl From<Member> for RegisterMemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name,
            submitted_at: member.submitted_at.to_string(),
        }
    }
}
