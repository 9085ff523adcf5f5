//! Finance ledgers: contributions, deposits, expenses, receipt files.

mod contributions;
mod deposits;
mod expenses;
mod receipts;

pub use contributions::{
    ContributionPatch, CreateContributionCommand, CreateContributionHandler,
    DeleteContributionHandler, ListContributionsHandler, UpdateContributionCommand,
    UpdateContributionHandler,
};
pub use deposits::{
    CreateDepositCommand, CreateDepositHandler, DeleteDepositHandler, DepositPatch,
    ListDepositsHandler, UpdateDepositCommand, UpdateDepositHandler,
};
pub use expenses::{
    CreateExpenseCommand, CreateExpenseHandler, DeleteExpenseHandler, ExpensePatch,
    ListExpensesHandler, UpdateExpenseCommand, UpdateExpenseHandler,
};
pub use receipts::{DeleteReceiptHandler, ListReceiptsHandler, UploadReceiptCommand, UploadReceiptHandler};
