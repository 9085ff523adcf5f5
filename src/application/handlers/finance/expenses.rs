//! Expense ledger use cases.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::finance::Expense;
use crate::domain::foundation::{DomainError, ErrorCode, ExpenseId, Money, UserId, ValidationError};
use crate::ports::ExpenseRepository;

/// Request to record money spent by the association.
#[derive(Debug, Clone)]
pub struct CreateExpenseCommand {
    pub description: String,
    pub amount: Money,
    pub expense_date: NaiveDate,
    pub category: String,
    pub created_by: UserId,
}

/// Handler for expense creation.
pub struct CreateExpenseHandler {
    expenses: Arc<dyn ExpenseRepository>,
}

impl CreateExpenseHandler {
    pub fn new(expenses: Arc<dyn ExpenseRepository>) -> Self {
        Self { expenses }
    }

    pub async fn handle(&self, command: CreateExpenseCommand) -> Result<Expense, DomainError> {
        if command.description.trim().is_empty() {
            return Err(ValidationError::empty_field("description").into());
        }
        let expense = Expense::new(
            command.description,
            command.amount,
            command.expense_date,
            command.category,
            command.created_by,
        );
        self.expenses.create(&expense).await?;
        Ok(expense)
    }
}

/// Editable expense fields. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub expense_date: Option<NaiveDate>,
    pub category: Option<String>,
}

/// Request to edit an existing expense.
#[derive(Debug, Clone)]
pub struct UpdateExpenseCommand {
    pub id: ExpenseId,
    pub patch: ExpensePatch,
    pub updated_by: UserId,
}

/// Handler for expense edits.
pub struct UpdateExpenseHandler {
    expenses: Arc<dyn ExpenseRepository>,
}

impl UpdateExpenseHandler {
    pub fn new(expenses: Arc<dyn ExpenseRepository>) -> Self {
        Self { expenses }
    }

    pub async fn handle(&self, command: UpdateExpenseCommand) -> Result<Expense, DomainError> {
        let mut expense = self
            .expenses
            .find_by_id(&command.id)
            .await?
            .ok_or_else(not_found)?;

        if let Some(description) = command.patch.description {
            if description.trim().is_empty() {
                return Err(ValidationError::empty_field("description").into());
            }
            expense.description = description;
        }
        if let Some(amount) = command.patch.amount {
            expense.amount = amount;
        }
        if let Some(date) = command.patch.expense_date {
            expense.expense_date = date;
        }
        if let Some(category) = command.patch.category {
            expense.category = category;
        }
        expense.touch(command.updated_by);

        self.expenses.update(&expense).await?;
        Ok(expense)
    }
}

/// Handler for hard deletion of an expense.
pub struct DeleteExpenseHandler {
    expenses: Arc<dyn ExpenseRepository>,
}

impl DeleteExpenseHandler {
    pub fn new(expenses: Arc<dyn ExpenseRepository>) -> Self {
        Self { expenses }
    }

    pub async fn handle(&self, id: ExpenseId) -> Result<(), DomainError> {
        self.expenses.delete(&id).await
    }
}

/// Handler for the expense listing, expense date descending.
pub struct ListExpensesHandler {
    expenses: Arc<dyn ExpenseRepository>,
}

impl ListExpensesHandler {
    pub fn new(expenses: Arc<dyn ExpenseRepository>) -> Self {
        Self { expenses }
    }

    pub async fn handle(&self) -> Result<Vec<Expense>, DomainError> {
        self.expenses.list().await
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::RecordNotFound, "Expense not found")
}
