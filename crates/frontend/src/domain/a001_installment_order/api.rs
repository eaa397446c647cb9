use contracts::domain::a001_installment_order::aggregate::{InstallmentOrder, InstallmentOrderId};
use contracts::domain::a001_installment_order::dto::{
    ApiErrorResponse, FinanceStatusFilter, InstallmentOrderListQuery,
    InstallmentOrderListResponse, UpdateInstallmentStatusRequest,
};
use contracts::domain::a001_installment_order::installment::FinanceDecision;
use gloo_net::http::{Request, RequestBuilder, Response};
use thiserror::Error;

use crate::shared::api_utils::{api_url, auth_header};

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("HTTP {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Human-readable message sent by the backend, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } => Some(message),
            _ => None,
        }
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match auth_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    match response
        .json::<ApiErrorResponse>()
        .await
        .ok()
        .and_then(ApiErrorResponse::into_message)
    {
        Some(message) => ApiError::Backend { status, message },
        None => ApiError::Status(status),
    }
}

fn list_url(filter: FinanceStatusFilter) -> Result<String, ApiError> {
    let query = serde_qs::to_string(&InstallmentOrderListQuery::from(filter))
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let mut url = api_url("/orders/installment/admin");
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    Ok(url)
}

/// Fetch installment orders, optionally restricted to one finance status
pub async fn fetch_installment_orders(
    filter: FinanceStatusFilter,
) -> Result<Vec<InstallmentOrder>, ApiError> {
    let url = list_url(filter)?;

    let response = with_auth(Request::get(&url).header("Accept", "application/json"))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let body: InstallmentOrderListResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(body.into_orders())
}

/// Set the finance status of a pending order to approved or rejected
pub async fn update_installment_status(
    id: &InstallmentOrderId,
    decision: FinanceDecision,
) -> Result<(), ApiError> {
    let url = api_url(&format!("/orders/{}/installment-status", id.value()));

    let response = with_auth(Request::put(&url).header("Accept", "application/json"))
        .json(&UpdateInstallmentStatusRequest::from(decision))
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}
