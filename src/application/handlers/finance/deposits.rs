//! Deposit ledger use cases.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::finance::Deposit;
use crate::domain::foundation::{DepositId, DomainError, ErrorCode, MemberId, Money, UserId};
use crate::ports::DepositRepository;

/// Request to record a payment actually received from a member.
#[derive(Debug, Clone)]
pub struct CreateDepositCommand {
    pub member_id: MemberId,
    pub amount: Money,
    pub deposit_date: NaiveDate,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
    pub created_by: UserId,
}

/// Handler for deposit creation.
pub struct CreateDepositHandler {
    deposits: Arc<dyn DepositRepository>,
}

impl CreateDepositHandler {
    pub fn new(deposits: Arc<dyn DepositRepository>) -> Self {
        Self { deposits }
    }

    pub async fn handle(&self, command: CreateDepositCommand) -> Result<Deposit, DomainError> {
        let deposit = Deposit::new(
            command.member_id,
            command.amount,
            command.deposit_date,
            command.description,
            command.receipt_url,
            command.created_by,
        );
        self.deposits.create(&deposit).await?;
        Ok(deposit)
    }
}

/// Editable deposit fields. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct DepositPatch {
    pub amount: Option<Money>,
    pub deposit_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
}

/// Request to edit an existing deposit.
#[derive(Debug, Clone)]
pub struct UpdateDepositCommand {
    pub id: DepositId,
    pub patch: DepositPatch,
    pub updated_by: UserId,
}

/// Handler for deposit edits. Identity and provenance fields are never
/// client-writable.
pub struct UpdateDepositHandler {
    deposits: Arc<dyn DepositRepository>,
}

impl UpdateDepositHandler {
    pub fn new(deposits: Arc<dyn DepositRepository>) -> Self {
        Self { deposits }
    }

    pub async fn handle(&self, command: UpdateDepositCommand) -> Result<Deposit, DomainError> {
        let mut deposit = self
            .deposits
            .find_by_id(&command.id)
            .await?
            .ok_or_else(not_found)?;

        if let Some(amount) = command.patch.amount {
            deposit.amount = amount;
        }
        if let Some(date) = command.patch.deposit_date {
            deposit.deposit_date = date;
        }
        if let Some(description) = command.patch.description {
            deposit.description = Some(description);
        }
        if let Some(url) = command.patch.receipt_url {
            deposit.receipt_url = Some(url);
        }
        deposit.touch(command.updated_by);

        self.deposits.update(&deposit).await?;
        Ok(deposit)
    }
}

/// Handler for hard deletion of a deposit.
pub struct DeleteDepositHandler {
    deposits: Arc<dyn DepositRepository>,
}

impl DeleteDepositHandler {
    pub fn new(deposits: Arc<dyn DepositRepository>) -> Self {
        Self { deposits }
    }

    pub async fn handle(&self, id: DepositId) -> Result<(), DomainError> {
        self.deposits.delete(&id).await
    }
}

/// Handler for the deposit listing, deposit date descending.
pub struct ListDepositsHandler {
    deposits: Arc<dyn DepositRepository>,
}

impl ListDepositsHandler {
    pub fn new(deposits: Arc<dyn DepositRepository>) -> Self {
        Self { deposits }
    }

    pub async fn handle(&self) -> Result<Vec<Deposit>, DomainError> {
        self.deposits.list().await
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::RecordNotFound, "Deposit not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDepositRepository;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn create_update_roundtrip() {
        let repo = Arc::new(InMemoryDepositRepository::new());
        let created = CreateDepositHandler::new(repo.clone())
            .handle(CreateDepositCommand {
                member_id: MemberId::new(),
                amount: Money::from_units(30),
                deposit_date: date(2025, 3, 10),
                description: None,
                receipt_url: None,
                created_by: UserId::new("treasurer-1").unwrap(),
            })
            .await
            .unwrap();

        let updated = UpdateDepositHandler::new(repo.clone())
            .handle(UpdateDepositCommand {
                id: created.id,
                patch: DepositPatch {
                    receipt_url: Some("https://storage.example.com/r1.jpg".to_string()),
                    ..Default::default()
                },
                updated_by: UserId::new("treasurer-2").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(updated.amount, created.amount);
        assert!(updated.receipt_url.is_some());
        assert_eq!(updated.updated_by.as_ref().unwrap().as_str(), "treasurer-2");
        assert!(updated.updated_at.is_some());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_of_missing_record_is_not_found() {
        let err = DeleteDepositHandler::new(Arc::new(InMemoryDepositRepository::new()))
            .handle(DepositId::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RecordNotFound);
    }
}
