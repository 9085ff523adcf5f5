//! In-memory repository implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::finance::{Contribution, Deposit, Expense};
use crate::domain::foundation::{
    ContributionId, DepositId, DomainError, ErrorCode, ExpenseId, MemberId, PeriodFilter,
    Timestamp, UserId,
};
use crate::domain::invite::InviteKey;
use crate::domain::member::Member;
use crate::ports::{
    AdminCredential, ContributionRepository, CredentialRepository, DepositRepository,
    ExpenseRepository, InviteKeyRepository, MemberRepository,
};

/// In-memory invite key store.
///
/// `consume_if_unconsumed` performs the check and the flip under one lock
/// acquisition, matching the atomicity of the SQL conditional update.
#[derive(Debug, Default)]
pub struct InMemoryInviteKeyRepository {
    keys: Mutex<HashMap<String, InviteKey>>,
}

impl InMemoryInviteKeyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key, for tests.
    pub fn with_key(self, key: InviteKey) -> Self {
        self.keys.lock().unwrap().insert(key.key.clone(), key);
        self
    }
}

#[async_trait]
impl InviteKeyRepository for InMemoryInviteKeyRepository {
    async fn find(&self, key: &str) -> Result<Option<InviteKey>, DomainError> {
        Ok(self.keys.lock().unwrap().get(key).cloned())
    }

    async fn save(&self, key: &InviteKey) -> Result<(), DomainError> {
        self.keys
            .lock()
            .unwrap()
            .insert(key.key.clone(), key.clone());
        Ok(())
    }

    async fn consume_if_unconsumed(
        &self,
        key: &str,
        consumed_by: &UserId,
        consumed_at: Timestamp,
    ) -> Result<bool, DomainError> {
        let mut keys = self.keys.lock().unwrap();
        match keys.get_mut(key) {
            Some(record) if !record.consumed => {
                record.consumed = true;
                record.consumed_by = Some(consumed_by.clone());
                record.consumed_at = Some(consumed_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<InviteKey>, DomainError> {
        let mut keys: Vec<InviteKey> = self.keys.lock().unwrap().values().cloned().collect();
        keys.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(keys)
    }
}

/// In-memory member registry.
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    members: Mutex<Vec<Member>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn create(&self, member: &Member) -> Result<(), DomainError> {
        self.members.lock().unwrap().push(member.clone());
        Ok(())
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        let mut members = self.members.lock().unwrap();
        match members.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => {
                *existing = member.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::MemberNotFound,
                "Member not found",
            )),
        }
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let mut members = self.members.lock().unwrap().clone();
        members.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(members)
    }
}

/// In-memory contribution ledger.
#[derive(Debug, Default)]
pub struct InMemoryContributionRepository {
    records: Mutex<Vec<Contribution>>,
}

impl InMemoryContributionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContributionRepository for InMemoryContributionRepository {
    async fn create(&self, contribution: &Contribution) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(contribution.clone());
        Ok(())
    }

    async fn update(&self, contribution: &Contribution) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|c| c.id == contribution.id) {
            Some(existing) => {
                *existing = contribution.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Contribution not found",
            )),
        }
    }

    async fn delete(&self, id: &ContributionId) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|c| &c.id != id);
        if records.len() == before {
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Contribution not found",
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &ContributionId) -> Result<Option<Contribution>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned())
    }

    async fn list(&self, filter: PeriodFilter) -> Result<Vec<Contribution>, DomainError> {
        let mut records: Vec<Contribution> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|c| filter.matches(&c.period))
            .cloned()
            .collect();
        records.sort_by(|a, b| b.period.cmp(&a.period));
        Ok(records)
    }

    async fn list_by_member(&self, member_id: &MemberId) -> Result<Vec<Contribution>, DomainError> {
        let mut records: Vec<Contribution> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|c| &c.member_id == member_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.period.cmp(&a.period));
        Ok(records)
    }
}

/// In-memory deposit ledger.
#[derive(Debug, Default)]
pub struct InMemoryDepositRepository {
    records: Mutex<Vec<Deposit>>,
}

impl InMemoryDepositRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DepositRepository for InMemoryDepositRepository {
    async fn create(&self, deposit: &Deposit) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(deposit.clone());
        Ok(())
    }

    async fn update(&self, deposit: &Deposit) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|d| d.id == deposit.id) {
            Some(existing) => {
                *existing = deposit.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Deposit not found",
            )),
        }
    }

    async fn delete(&self, id: &DepositId) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|d| &d.id != id);
        if records.len() == before {
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Deposit not found",
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &DepositId) -> Result<Option<Deposit>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|d| &d.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Deposit>, DomainError> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.deposit_date.cmp(&a.deposit_date));
        Ok(records)
    }

    async fn list_by_member(&self, member_id: &MemberId) -> Result<Vec<Deposit>, DomainError> {
        let mut records: Vec<Deposit> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|d| &d.member_id == member_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.deposit_date.cmp(&a.deposit_date));
        Ok(records)
    }
}

/// In-memory expense ledger.
#[derive(Debug, Default)]
pub struct InMemoryExpenseRepository {
    records: Mutex<Vec<Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn create(&self, expense: &Expense) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(expense.clone());
        Ok(())
    }

    async fn update(&self, expense: &Expense) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|e| e.id == expense.id) {
            Some(existing) => {
                *existing = expense.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Expense not found",
            )),
        }
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|e| &e.id != id);
        if records.len() == before {
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Expense not found",
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &ExpenseId) -> Result<Option<Expense>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|e| &e.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Expense>, DomainError> {
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.expense_date.cmp(&a.expense_date));
        Ok(records)
    }
}

/// In-memory credential store.
#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    credentials: Mutex<Vec<AdminCredential>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a credential, for tests.
    pub fn with_credential(self, credential: AdminCredential) -> Self {
        self.credentials.lock().unwrap().push(credential);
        self
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminCredential>, DomainError> {
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invite::InviteKey;

    fn issuer() -> UserId {
        UserId::new("admin-1").unwrap()
    }

    #[tokio::test]
    async fn consume_transitions_exactly_once() {
        let repo = InMemoryInviteKeyRepository::new()
            .with_key(InviteKey::register("BM-a1b2c3d4", issuer()).unwrap());
        let registrant = UserId::new("member-1").unwrap();

        let first = repo
            .consume_if_unconsumed("BM-a1b2c3d4", &registrant, Timestamp::now())
            .await
            .unwrap();
        let second = repo
            .consume_if_unconsumed("BM-a1b2c3d4", &registrant, Timestamp::now())
            .await
            .unwrap();

        assert!(first);
        assert!(!second);

        let record = repo.find("BM-a1b2c3d4").await.unwrap().unwrap();
        assert!(record.consumed);
        assert_eq!(record.consumed_by.unwrap().as_str(), "member-1");
    }

    #[tokio::test]
    async fn consume_of_unknown_key_is_false() {
        let repo = InMemoryInviteKeyRepository::new();
        let registrant = UserId::new("member-1").unwrap();
        let result = repo
            .consume_if_unconsumed("BM-missing0", &registrant, Timestamp::now())
            .await
            .unwrap();
        assert!(!result);
    }

    #[tokio::test]
    async fn save_overwrites_existing_key() {
        let repo = InMemoryInviteKeyRepository::new();
        let key = InviteKey::register("BM-a1b2c3d4", issuer()).unwrap();
        repo.save(&key).await.unwrap();

        let mut consumed = key.clone();
        consumed.consumed = true;
        repo.save(&consumed).await.unwrap();

        // Overwrite is the documented (loose) behavior of re-registration.
        let reregistered = InviteKey::register("BM-a1b2c3d4", issuer()).unwrap();
        repo.save(&reregistered).await.unwrap();
        assert!(!repo.find("BM-a1b2c3d4").await.unwrap().unwrap().consumed);
    }
}
