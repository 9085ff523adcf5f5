//! Expense ledger repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ExpenseId};
use crate::domain::finance::Expense;

/// Persistence for expense records.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Persists a new expense.
    async fn create(&self, expense: &Expense) -> Result<(), DomainError>;

    /// Replaces an existing expense.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the expense does not exist
    async fn update(&self, expense: &Expense) -> Result<(), DomainError>;

    /// Deletes an expense permanently.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the expense does not exist
    async fn delete(&self, id: &ExpenseId) -> Result<(), DomainError>;

    /// Finds an expense by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ExpenseId) -> Result<Option<Expense>, DomainError>;

    /// Lists all expenses, expense date descending.
    async fn list(&self) -> Result<Vec<Expense>, DomainError>;
}
