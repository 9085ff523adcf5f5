//! Administrator roles and capability checks.
//!
//! Roles are an enumerated type with explicit capability methods; route
//! guards call the capability, never compare strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Authorization tier carried in the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// General administrator: member registry and invite keys.
    #[serde(rename = "admin")]
    Admin,

    /// Treasurer: finance ledger and reports.
    #[serde(rename = "financeiro")]
    Financeiro,

    /// Combined tier with both capability sets.
    #[serde(rename = "admin-financeiro")]
    AdminFinanceiro,
}

impl Role {
    /// Whether this role may access the finance ledger and reports.
    pub fn can_manage_finance(&self) -> bool {
        matches!(self, Role::Financeiro | Role::AdminFinanceiro)
    }

    /// Whether this role may view and edit member records.
    pub fn can_manage_members(&self) -> bool {
        matches!(self, Role::Admin | Role::AdminFinanceiro)
    }

    /// Whether this role may register invite keys.
    pub fn can_issue_invites(&self) -> bool {
        matches!(self, Role::Admin | Role::AdminFinanceiro)
    }

    /// The wire representation used in token claims and the credential store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Financeiro => "financeiro",
            Role::AdminFinanceiro => "admin-financeiro",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "financeiro" => Ok(Role::Financeiro),
            "admin-financeiro" => Ok(Role::AdminFinanceiro),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}
