use super::aggregate::InstallmentOrder;
use super::installment::{FinanceDecision, FinanceStatus};
use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// List filter
// ============================================================================

/// Status filter of the admin list; `All` imposes no constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FinanceStatusFilter {
    #[default]
    All,
    Only(FinanceStatus),
}

impl FinanceStatusFilter {
    pub const ALL: [FinanceStatusFilter; 4] = [
        FinanceStatusFilter::All,
        FinanceStatusFilter::Only(FinanceStatus::Pending),
        FinanceStatusFilter::Only(FinanceStatus::Approved),
        FinanceStatusFilter::Only(FinanceStatus::Rejected),
    ];

    /// Value used by the `<select>`; unknown values fall back to `All`
    pub fn from_value(value: &str) -> Self {
        FinanceStatus::from_code(value)
            .map(FinanceStatusFilter::Only)
            .unwrap_or_default()
    }

    pub fn value(&self) -> &'static str {
        match self {
            FinanceStatusFilter::All => "all",
            FinanceStatusFilter::Only(status) => status.code(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FinanceStatusFilter::All => "Tất cả",
            FinanceStatusFilter::Only(status) => status.label(),
        }
    }

    pub fn status(&self) -> Option<FinanceStatus> {
        match self {
            FinanceStatusFilter::All => None,
            FinanceStatusFilter::Only(status) => Some(*status),
        }
    }

    pub fn matches(&self, status: Option<FinanceStatus>) -> bool {
        match self {
            FinanceStatusFilter::All => true,
            FinanceStatusFilter::Only(expected) => status == Some(*expected),
        }
    }
}

// ============================================================================
// Requests / Responses
// ============================================================================

/// Query string of `GET /orders/installment/admin`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstallmentOrderListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FinanceStatus>,
}

impl From<FinanceStatusFilter> for InstallmentOrderListQuery {
    fn from(filter: FinanceStatusFilter) -> Self {
        Self {
            status: filter.status(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallmentOrderListResponse {
    /// Entries without a readable `_id` are dropped; other fields degrade per order
    #[serde(default, deserialize_with = "lenient::valid_entries")]
    pub orders: Option<Vec<InstallmentOrder>>,
}

impl InstallmentOrderListResponse {
    pub fn into_orders(self) -> Vec<InstallmentOrder> {
        self.orders.unwrap_or_default()
    }
}

/// Body of `PUT /orders/{id}/installment-status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstallmentStatusRequest {
    pub finance_status: FinanceStatus,
}

impl From<FinanceDecision> for UpdateInstallmentStatusRequest {
    fn from(decision: FinanceDecision) -> Self {
        Self {
            finance_status: decision.target_status(),
        }
    }
}

/// Error body returned by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}
