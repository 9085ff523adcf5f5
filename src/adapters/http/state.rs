//! Shared application state for the HTTP layer.

use std::sync::Arc;

use secrecy::SecretString;

use crate::application::handlers::auth::LoginHandler;
use crate::application::handlers::finance::{
    CreateContributionHandler, CreateDepositHandler, CreateExpenseHandler,
    DeleteContributionHandler, DeleteDepositHandler, DeleteExpenseHandler, DeleteReceiptHandler,
    ListContributionsHandler, ListDepositsHandler, ListExpensesHandler, ListReceiptsHandler,
    UpdateContributionHandler, UpdateDepositHandler, UpdateExpenseHandler, UploadReceiptHandler,
};
use crate::application::handlers::invites::{ListKeysHandler, RegisterKeyHandler};
use crate::application::handlers::members::{ListMembersHandler, UpdateMemberHandler};
use crate::application::handlers::registration::RegisterMemberHandler;
use crate::application::handlers::reports::{MemberStatementHandler, PaymentReportHandler};
use crate::domain::invite::MasterKeys;
use crate::ports::{
    Authenticator, ContributionRepository, CredentialRepository, DepositRepository,
    ExpenseRepository, InviteKeyRepository, Mailer, MemberRepository, ObjectStorage,
};

/// Arc-wrapped dependencies shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
    pub credentials: Arc<dyn CredentialRepository>,
    pub invites: Arc<dyn InviteKeyRepository>,
    pub members: Arc<dyn MemberRepository>,
    pub contributions: Arc<dyn ContributionRepository>,
    pub deposits: Arc<dyn DepositRepository>,
    pub expenses: Arc<dyn ExpenseRepository>,
    pub mailer: Arc<dyn Mailer>,
    pub storage: Arc<dyn ObjectStorage>,
    pub master_keys: MasterKeys,
    pub credential_pepper: SecretString,
    pub notify_email: String,
}

impl AppState {
    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.credentials.clone(),
            self.authenticator.clone(),
            self.credential_pepper.clone(),
        )
    }

    pub fn register_member_handler(&self) -> RegisterMemberHandler {
        RegisterMemberHandler::new(
            self.invites.clone(),
            self.members.clone(),
            self.mailer.clone(),
            self.master_keys.clone(),
            self.notify_email.clone(),
        )
    }

    pub fn register_key_handler(&self) -> RegisterKeyHandler {
        RegisterKeyHandler::new(self.invites.clone())
    }

    pub fn list_keys_handler(&self) -> ListKeysHandler {
        ListKeysHandler::new(self.invites.clone())
    }

    pub fn list_members_handler(&self) -> ListMembersHandler {
        ListMembersHandler::new(self.members.clone())
    }

    pub fn update_member_handler(&self) -> UpdateMemberHandler {
        UpdateMemberHandler::new(self.members.clone())
    }

    pub fn create_contribution_handler(&self) -> CreateContributionHandler {
        CreateContributionHandler::new(self.contributions.clone())
    }

    pub fn update_contribution_handler(&self) -> UpdateContributionHandler {
        UpdateContributionHandler::new(self.contributions.clone())
    }

    pub fn delete_contribution_handler(&self) -> DeleteContributionHandler {
        DeleteContributionHandler::new(self.contributions.clone())
    }

    pub fn list_contributions_handler(&self) -> ListContributionsHandler {
        ListContributionsHandler::new(self.contributions.clone())
    }

    pub fn create_deposit_handler(&self) -> CreateDepositHandler {
        CreateDepositHandler::new(self.deposits.clone())
    }

    pub fn update_deposit_handler(&self) -> UpdateDepositHandler {
        UpdateDepositHandler::new(self.deposits.clone())
    }

    pub fn delete_deposit_handler(&self) -> DeleteDepositHandler {
        DeleteDepositHandler::new(self.deposits.clone())
    }

    pub fn list_deposits_handler(&self) -> ListDepositsHandler {
        ListDepositsHandler::new(self.deposits.clone())
    }

    pub fn create_expense_handler(&self) -> CreateExpenseHandler {
        CreateExpenseHandler::new(self.expenses.clone())
    }

    pub fn update_expense_handler(&self) -> UpdateExpenseHandler {
        UpdateExpenseHandler::new(self.expenses.clone())
    }

    pub fn delete_expense_handler(&self) -> DeleteExpenseHandler {
        DeleteExpenseHandler::new(self.expenses.clone())
    }

    pub fn list_expenses_handler(&self) -> ListExpensesHandler {
        ListExpensesHandler::new(self.expenses.clone())
    }

    pub fn upload_receipt_handler(&self) -> UploadReceiptHandler {
        UploadReceiptHandler::new(self.storage.clone())
    }

    pub fn list_receipts_handler(&self) -> ListReceiptsHandler {
        ListReceiptsHandler::new(self.storage.clone())
    }

    pub fn delete_receipt_handler(&self) -> DeleteReceiptHandler {
        DeleteReceiptHandler::new(self.storage.clone())
    }

    pub fn payment_report_handler(&self) -> PaymentReportHandler {
        PaymentReportHandler::new(
            self.members.clone(),
            self.contributions.clone(),
            self.deposits.clone(),
        )
    }

    pub fn member_statement_handler(&self) -> MemberStatementHandler {
        MemberStatementHandler::new(
            self.members.clone(),
            self.contributions.clone(),
            self.deposits.clone(),
        )
    }
}
