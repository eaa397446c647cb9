use contracts::domain::a001_installment_order::aggregate::{InstallmentOrder, InstallmentOrderId};
use contracts::domain::a001_installment_order::installment::FinanceStatus;

use crate::shared::date_utils::format_datetime_vi_opt;
use crate::shared::display::{or_empty, or_na, NOT_AVAILABLE};
use crate::shared::number_format::format_vnd_opt;

/// Display texts of one table row
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentOrderRow {
    pub id: InstallmentOrderId,
    pub code: String,
    pub customer_name: String,
    pub customer_email: String,
    pub installment_type: String,
    pub monthly_payment: String,
    pub total: String,
    pub status: Option<FinanceStatus>,
    pub status_label: String,
    pub created_at: String,
}

impl From<&InstallmentOrder> for InstallmentOrderRow {
    fn from(order: &InstallmentOrder) -> Self {
        let installment_type = match order.installment_type() {
            Some(kind) => format!("{} {}", kind.icon(), kind.label()),
            None => NOT_AVAILABLE.to_string(),
        };
        Self {
            id: order.id.clone(),
            code: order.id.short(),
            customer_name: or_na(order.customer_name()),
            customer_email: or_empty(order.customer_email()),
            installment_type,
            monthly_payment: format_vnd_opt(
                order.installment.as_ref().and_then(|i| i.monthly_payment),
            ),
            total: format_vnd_opt(order.total),
            status: order.finance_status(),
            status_label: or_na(order.status_label()),
            created_at: format_datetime_vi_opt(order.created_at.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> InstallmentOrderRow {
        let order: InstallmentOrder = serde_json::from_value(value).unwrap();
        InstallmentOrderRow::from(&order)
    }

    #[test]
    fn test_full_row() {
        let row = row(json!({
            "_id": "65f1c2a9e4b0a1b2c3d4e5f6",
            "customerId": { "name": "Nguyễn Văn A", "email": "a@example.com" },
            "total": 25990000,
            "createdAt": "2024-03-15T07:02:26Z",
            "installment": {
                "type": "creditCard",
                "monthlyPayment": 4331667,
                "financeStatus": "approved"
            }
        }));

        assert_eq!(row.code, "c3d4e5f6");
        assert_eq!(row.customer_name, "Nguyễn Văn A");
        assert_eq!(row.customer_email, "a@example.com");
        assert_eq!(row.installment_type, "💳 Thẻ tín dụng");
        assert_eq!(row.monthly_payment, "4.331.667\u{a0}₫");
        assert_eq!(row.total, "25.990.000\u{a0}₫");
        assert_eq!(row.status, Some(FinanceStatus::Approved));
        assert_eq!(row.status_label, "Đã duyệt");
        assert_eq!(row.created_at, "14:02:26 15/3/2024");
    }

    #[test]
    fn test_sparse_order_degrades_to_placeholders() {
        let row = row(json!({ "_id": "abc", "customerId": "u1", "total": null }));

        assert_eq!(row.code, "abc");
        assert_eq!(row.customer_name, "N/A");
        assert_eq!(row.customer_email, "");
        assert_eq!(row.installment_type, "N/A");
        assert_eq!(row.monthly_payment, "N/A");
        assert_eq!(row.total, "N/A");
        assert_eq!(row.status, None);
        assert_eq!(row.status_label, "N/A");
        assert_eq!(row.created_at, "N/A");
    }

    #[test]
    fn test_untyped_plan_and_unknown_status() {
        let row = row(json!({
            "_id": "def",
            "installment": { "financeStatus": "cancelled", "monthlyPayment": null }
        }));

        assert_eq!(row.installment_type, "🏦 Công ty tài chính");
        assert_eq!(row.monthly_payment, "N/A");
        assert_eq!(row.status, None);
        assert_eq!(row.status_label, "cancelled");
    }
}
