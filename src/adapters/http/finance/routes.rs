//! Router for finance endpoints.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_contribution, create_deposit, create_expense, delete_contribution, delete_deposit,
    delete_expense, delete_receipt, list_contributions, list_deposits, list_expenses,
    list_receipts, member_statement, payment_report, update_contribution, update_deposit,
    update_expense, upload_receipt,
};

/// Finance endpoints, all behind the finance guard.
///
/// - `GET|POST /finance/contributions`, `PUT|DELETE /finance/contributions/:id`
/// - `GET|POST /finance/deposits`, `PUT|DELETE /finance/deposits/:id`
/// - `GET|POST /finance/expenses`, `PUT|DELETE /finance/expenses/:id`
/// - `GET /finance/reports/payments?year&month`
/// - `GET /finance/reports/member/:member_id`
/// - `GET|POST /finance/receipts`, `DELETE /finance/receipts/:name`
pub fn finance_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/finance/contributions",
            get(list_contributions).post(create_contribution),
        )
        .route(
            "/finance/contributions/:id",
            put(update_contribution).delete(delete_contribution),
        )
        .route("/finance/deposits", get(list_deposits).post(create_deposit))
        .route(
            "/finance/deposits/:id",
            put(update_deposit).delete(delete_deposit),
        )
        .route("/finance/expenses", get(list_expenses).post(create_expense))
        .route(
            "/finance/expenses/:id",
            put(update_expense).delete(delete_expense),
        )
        .route("/finance/reports/payments", get(payment_report))
        .route("/finance/reports/member/:member_id", get(member_statement))
        .route("/finance/receipts", get(list_receipts).post(upload_receipt))
        .route("/finance/receipts/:name", delete(delete_receipt))
}
