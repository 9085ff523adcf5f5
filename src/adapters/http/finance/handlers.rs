//! HTTP handlers for finance endpoints.
//!
//! Every route here requires the finance capability; the guard runs before
//! any parsing or storage work.

use axum::extract::{Json, Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::{forbidden, RequireAuth};
use crate::adapters::http::state::AppState;
use crate::application::handlers::finance::{
    ContributionPatch, CreateContributionCommand, CreateDepositCommand, CreateExpenseCommand,
    DepositPatch, ExpensePatch, UpdateContributionCommand, UpdateDepositCommand,
    UpdateExpenseCommand, UploadReceiptCommand,
};
use crate::application::handlers::reports::PaymentReportQuery;
use crate::domain::foundation::{AuthenticatedUser, ContributionId, DepositId, ExpenseId, MemberId};

use super::dto::{
    parse_amount, parse_period, ContributionResponse, CreateContributionRequest,
    CreateDepositRequest, CreateExpenseRequest, DepositResponse, ExpenseResponse,
    MemberStatementResponse, PaymentReportRowResponse, PeriodQuery, ReceiptResponse,
    UpdateContributionRequest, UpdateDepositRequest, UpdateExpenseRequest, UploadReceiptResponse,
};

fn finance_guard(user: &AuthenticatedUser) -> Result<(), Response> {
    if user.role.can_manage_finance() {
        Ok(())
    } else {
        Err(forbidden())
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("VALIDATION_FAILED", message)),
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Contributions
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /finance/contributions`
pub async fn create_contribution(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<CreateContributionRequest>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let member_id: MemberId = match body.member_id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid member id"),
    };
    let period = match parse_period(body.year, body.month) {
        Ok(period) => period,
        Err(e) => return domain_error_response(e),
    };
    let amount = match parse_amount(body.amount) {
        Ok(amount) => amount,
        Err(e) => return domain_error_response(e),
    };

    let result = state
        .create_contribution_handler()
        .handle(CreateContributionCommand {
            member_id,
            period,
            amount,
            created_by: user.id,
        })
        .await;

    match result {
        Ok(contribution) => (
            StatusCode::CREATED,
            Json(ContributionResponse::from(contribution)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `GET /finance/contributions?year&month`
pub async fn list_contributions(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<PeriodQuery>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    match state.list_contributions_handler().handle(query.into()).await {
        Ok(contributions) => Json(
            contributions
                .into_iter()
                .map(ContributionResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `PUT /finance/contributions/:id`
pub async fn update_contribution(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<UpdateContributionRequest>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let id: ContributionId = match id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid contribution id"),
    };

    let period = match (body.year, body.month) {
        (Some(year), Some(month)) => match parse_period(year, month) {
            Ok(period) => Some(period),
            Err(e) => return domain_error_response(e),
        },
        (None, None) => None,
        _ => return bad_request("year and month must be provided together"),
    };
    let amount = match body.amount.map(parse_amount).transpose() {
        Ok(amount) => amount,
        Err(e) => return domain_error_response(e),
    };

    let result = state
        .update_contribution_handler()
        .handle(UpdateContributionCommand {
            id,
            patch: ContributionPatch {
                period,
                amount,
                status: body.status,
            },
            updated_by: user.id,
        })
        .await;

    match result {
        Ok(contribution) => Json(ContributionResponse::from(contribution)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `DELETE /finance/contributions/:id`
pub async fn delete_contribution(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let id: ContributionId = match id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid contribution id"),
    };

    match state.delete_contribution_handler().handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Deposits
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /finance/deposits`
pub async fn create_deposit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<CreateDepositRequest>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let member_id: MemberId = match body.member_id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid member id"),
    };
    let amount = match parse_amount(body.amount) {
        Ok(amount) => amount,
        Err(e) => return domain_error_response(e),
    };

    let result = state
        .create_deposit_handler()
        .handle(CreateDepositCommand {
            member_id,
            amount,
            deposit_date: body.deposit_date,
            description: body.description,
            receipt_url: body.receipt_url,
            created_by: user.id,
        })
        .await;

    match result {
        Ok(deposit) => (StatusCode::CREATED, Json(DepositResponse::from(deposit))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `GET /finance/deposits`
pub async fn list_deposits(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    match state.list_deposits_handler().handle().await {
        Ok(deposits) => Json(
            deposits
                .into_iter()
                .map(DepositResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `PUT /finance/deposits/:id`
pub async fn update_deposit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<UpdateDepositRequest>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let id: DepositId = match id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid deposit id"),
    };
    let amount = match body.amount.map(parse_amount).transpose() {
        Ok(amount) => amount,
        Err(e) => return domain_error_response(e),
    };

    let result = state
        .update_deposit_handler()
        .handle(UpdateDepositCommand {
            id,
            patch: DepositPatch {
                amount,
                deposit_date: body.deposit_date,
                description: body.description,
                receipt_url: body.receipt_url,
            },
            updated_by: user.id,
        })
        .await;

    match result {
        Ok(deposit) => Json(DepositResponse::from(deposit)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `DELETE /finance/deposits/:id`
pub async fn delete_deposit(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let id: DepositId = match id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid deposit id"),
    };

    match state.delete_deposit_handler().handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Expenses
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /finance/expenses`
pub async fn create_expense(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<CreateExpenseRequest>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let amount = match parse_amount(body.amount) {
        Ok(amount) => amount,
        Err(e) => return domain_error_response(e),
    };

    let result = state
        .create_expense_handler()
        .handle(CreateExpenseCommand {
            description: body.description,
            amount,
            expense_date: body.expense_date,
            category: body.category,
            created_by: user.id,
        })
        .await;

    match result {
        Ok(expense) => (StatusCode::CREATED, Json(ExpenseResponse::from(expense))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `GET /finance/expenses`
pub async fn list_expenses(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    match state.list_expenses_handler().handle().await {
        Ok(expenses) => Json(
            expenses
                .into_iter()
                .map(ExpenseResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `PUT /finance/expenses/:id`
pub async fn update_expense(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<UpdateExpenseRequest>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let id: ExpenseId = match id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid expense id"),
    };
    let amount = match body.amount.map(parse_amount).transpose() {
        Ok(amount) => amount,
        Err(e) => return domain_error_response(e),
    };

    let result = state
        .update_expense_handler()
        .handle(UpdateExpenseCommand {
            id,
            patch: ExpensePatch {
                description: body.description,
                amount,
                expense_date: body.expense_date,
                category: body.category,
            },
            updated_by: user.id,
        })
        .await;

    match result {
        Ok(expense) => Json(ExpenseResponse::from(expense)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `DELETE /finance/expenses/:id`
pub async fn delete_expense(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let id: ExpenseId = match id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid expense id"),
    };

    match state.delete_expense_handler().handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Reports
// ════════════════════════════════════════════════════════════════════════════════

/// `GET /finance/reports/payments?year&month`
pub async fn payment_report(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<PeriodQuery>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let result = state
        .payment_report_handler()
        .handle(PaymentReportQuery {
            filter: query.into(),
        })
        .await;

    match result {
        Ok(rows) => Json(
            rows.into_iter()
                .map(PaymentReportRowResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `GET /finance/reports/member/:member_id`
pub async fn member_statement(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(member_id): Path<String>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let member_id: MemberId = match member_id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid member id"),
    };

    match state.member_statement_handler().handle(member_id).await {
        Ok(statement) => Json(MemberStatementResponse::from(statement)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Receipts
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /finance/receipts` - multipart upload, first file field wins.
pub async fn upload_receipt(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    mut multipart: Multipart,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => return bad_request("Multipart body has no file field"),
        Err(_) => return bad_request("Malformed multipart body"),
    };

    let file_name = match field.file_name() {
        Some(name) => name.to_string(),
        None => return bad_request("File field has no filename"),
    };
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = match field.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(_) => return bad_request("Could not read file field"),
    };

    let result = state
        .upload_receipt_handler()
        .handle(UploadReceiptCommand {
            file_name,
            content_type,
            bytes,
        })
        .await;

    match result {
        Ok(url) => (StatusCode::CREATED, Json(UploadReceiptResponse { url })).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `GET /finance/receipts`
pub async fn list_receipts(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    match state.list_receipts_handler().handle().await {
        Ok(objects) => Json(
            objects
                .into_iter()
                .map(ReceiptResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// `DELETE /finance/receipts/:name`
pub async fn delete_receipt(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(name): Path<String>,
) -> Response {
    if let Err(response) = finance_guard(&user) {
        return response;
    }

    match state.delete_receipt_handler().handle(&name).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
