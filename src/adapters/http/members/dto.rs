//! JSON DTOs for member registry endpoints.

use serde::Serialize;

use crate::domain::member::Member;

/// One member in a listing or update response.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub instrument: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub tefa: Option<String>,
    pub terms_version: String,
    pub terms_accepted: bool,
    pub submitted_at: String,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name,
            instrument: member.instrument,
            email: member.email,
            city: member.city,
            state: member.state,
            phone: member.phone,
            tefa: member.tefa,
            terms_version: member.terms_version,
            terms_accepted: member.terms_accepted,
            submitted_at: member.submitted_at.to_string(),
        }
    }
}
