use contracts::domain::a001_installment_order::aggregate::InstallmentOrder;
use contracts::domain::a001_installment_order::installment::{
    CustomerInfo, FinanceDecision, FinanceStatus, Installment,
};

use crate::shared::api_utils::site_url;
use crate::shared::date_utils::format_datetime_vi_opt;
use crate::shared::display::{or_empty, or_na, NOT_AVAILABLE};
use crate::shared::number_format::format_vnd_opt;

/// One "label: value" cell of the details grid
#[derive(Debug, Clone, PartialEq)]
pub struct InfoField {
    pub label: &'static str,
    pub value: String,
}

impl InfoField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentEntry {
    pub label: &'static str,
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemLine {
    pub name: String,
    pub quantity: u32,
    pub price: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    Reject,
    Approve,
    Close,
}

impl FooterAction {
    pub fn label(&self) -> &'static str {
        match self {
            FooterAction::Reject => "Từ chối",
            FooterAction::Approve => "Duyệt hồ sơ",
            FooterAction::Close => "Đóng",
        }
    }

    pub fn decision(&self) -> Option<FinanceDecision> {
        match self {
            FooterAction::Reject => Some(FinanceDecision::Reject),
            FooterAction::Approve => Some(FinanceDecision::Approve),
            FooterAction::Close => None,
        }
    }
}

/// Read-only presentation of one installment order
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentOrderDetailsViewModel {
    pub order: InstallmentOrder,
}

impl InstallmentOrderDetailsViewModel {
    pub fn new(order: InstallmentOrder) -> Self {
        Self { order }
    }

    pub fn status(&self) -> Option<FinanceStatus> {
        self.order.finance_status()
    }

    pub fn status_label(&self) -> String {
        or_na(self.order.status_label())
    }

    pub fn order_fields(&self) -> Vec<InfoField> {
        vec![
            InfoField::new("Mã đơn", self.order.id.value()),
            InfoField::new(
                "Ngày tạo",
                format_datetime_vi_opt(self.order.created_at.as_ref()),
            ),
        ]
    }

    pub fn plan_fields(&self) -> Vec<InfoField> {
        let Some(plan) = self.order.installment.as_ref() else {
            return vec![InfoField::new("Hình thức", NOT_AVAILABLE)];
        };
        let mut fields = vec![
            InfoField::new("Hình thức", plan.installment_type().label()),
            InfoField::new("Trả trước", format_vnd_opt(plan.upfront)),
            InfoField::new(
                "Số tháng",
                plan.months
                    .map(|m| format!("{} tháng", m))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            InfoField::new(
                "Lãi suất",
                plan.interest_rate
                    .map(|r| format!("{}%/tháng", r))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            InfoField::new("Trả hàng tháng", format_vnd_opt(plan.monthly_payment)),
            InfoField::new("Tổng phải trả", format_vnd_opt(plan.total_payment)),
        ];
        if let Some(transaction_id) = plan.transaction_id.as_deref() {
            fields.push(InfoField::new("Mã giao dịch", transaction_id));
        }
        fields
    }

    /// Exactly one field set, chosen by the customer info variant
    pub fn customer_fields(&self) -> Vec<InfoField> {
        match self.order.installment.as_ref().map(|p| &p.customer_info) {
            Some(CustomerInfo::CreditCard(info)) => vec![
                InfoField::new("Chủ thẻ", or_empty(info.card_holder.as_deref())),
                InfoField::new("Số thẻ", info.masked_card_number().unwrap_or_default()),
                InfoField::new("Ngân hàng", or_empty(info.bank.as_deref())),
                InfoField::new("Địa chỉ", or_empty(info.address.as_deref())),
                InfoField::new("SĐT", or_empty(info.phone.as_deref())),
            ],
            Some(CustomerInfo::FinanceCompany(info)) => vec![
                InfoField::new("Họ tên", or_empty(info.full_name.as_deref())),
                InfoField::new("CMND/CCCD", or_empty(info.id_number.as_deref())),
                InfoField::new("SĐT", or_empty(info.phone.as_deref())),
                InfoField::new("Email", or_empty(info.email.as_deref())),
                InfoField::new("Địa chỉ", or_empty(info.address.as_deref())),
                InfoField::new("Thu nhập/tháng", format_vnd_opt(info.monthly_income)),
                InfoField::new("SĐT người thân 1", or_empty(info.relative_phone1.as_deref())),
                InfoField::new("SĐT người thân 2", or_empty(info.relative_phone2.as_deref())),
            ],
            None => Vec::new(),
        }
    }

    /// Uploaded documents; empty for credit card orders
    pub fn documents(&self) -> Vec<DocumentEntry> {
        self.order
            .installment
            .as_ref()
            .map(Installment::documents)
            .unwrap_or_default()
            .into_iter()
            .map(|(kind, name)| DocumentEntry {
                label: kind.label(),
                name: name.to_string(),
                href: site_url(name),
            })
            .collect()
    }

    pub fn items(&self) -> Vec<ItemLine> {
        self.order
            .items
            .iter()
            .map(|item| ItemLine {
                name: or_na(item.product_name()),
                quantity: item.quantity,
                price: format_vnd_opt(item.price),
            })
            .collect()
    }

    /// Decisions the current status allows; `Close` when there are none
    pub fn footer_actions(&self) -> Vec<FooterAction> {
        let status = self.status();
        let decisions: Vec<FooterAction> = [FooterAction::Reject, FooterAction::Approve]
            .into_iter()
            .filter(|action| {
                status
                    .zip(action.decision())
                    .is_some_and(|(s, d)| s.can_transition_to(d.target_status()))
            })
            .collect();
        if decisions.is_empty() {
            vec![FooterAction::Close]
        } else {
            decisions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vm(value: serde_json::Value) -> InstallmentOrderDetailsViewModel {
        InstallmentOrderDetailsViewModel::new(serde_json::from_value(value).unwrap())
    }

    fn labels(fields: &[InfoField]) -> Vec<&'static str> {
        fields.iter().map(|f| f.label).collect()
    }

    fn credit_card_order(status: &str) -> InstallmentOrderDetailsViewModel {
        vm(json!({
            "_id": "65f1c2a9e4b0a1b2c3d4e5f6",
            "createdAt": "2024-03-15T07:02:26Z",
            "items": [{ "productId": { "name": "iPhone 15" }, "quantity": 1, "price": 25990000 }],
            "total": 25990000,
            "installment": {
                "type": "creditCard",
                "months": 6,
                "interestRate": 0,
                "monthlyPayment": 4331667,
                "totalPayment": 25990000,
                "financeStatus": status,
                "transactionId": "TXN-42",
                "customerInfo": {
                    "cardHolder": "NGUYEN VAN A",
                    "cardNumber": "4111111111114242",
                    "bank": "Techcombank",
                    "address": "1 Lê Lợi, Q1",
                    "phone": "0901234567"
                },
                "uploadedDocuments": { "idCardFront": "front.jpg" }
            }
        }))
    }

    #[test]
    fn test_pending_shows_reject_and_approve() {
        let actions = credit_card_order("pending").footer_actions();
        assert_eq!(actions, vec![FooterAction::Reject, FooterAction::Approve]);
        assert_eq!(actions[1].decision(), Some(FinanceDecision::Approve));
    }

    #[test]
    fn test_terminal_shows_only_close() {
        for status in ["approved", "rejected"] {
            assert_eq!(
                credit_card_order(status).footer_actions(),
                vec![FooterAction::Close]
            );
        }
        let no_plan = vm(json!({ "_id": "x" }));
        assert_eq!(no_plan.footer_actions(), vec![FooterAction::Close]);

        let no_status = vm(json!({ "_id": "y", "installment": { "type": "creditCard" } }));
        assert_eq!(no_status.footer_actions(), vec![FooterAction::Close]);
        assert_eq!(no_status.status_label(), "N/A");

        let unknown = vm(json!({
            "_id": "z",
            "installment": { "type": "creditCard", "financeStatus": "cancelled" }
        }));
        assert_eq!(unknown.footer_actions(), vec![FooterAction::Close]);
        assert_eq!(unknown.status_label(), "cancelled");
    }

    #[test]
    fn test_credit_card_customer_fields() {
        let details = credit_card_order("pending");
        let fields = details.customer_fields();
        assert_eq!(
            labels(&fields),
            vec!["Chủ thẻ", "Số thẻ", "Ngân hàng", "Địa chỉ", "SĐT"]
        );
        assert_eq!(fields[1].value, "**** 4242");
        assert!(!fields.iter().any(|f| f.value.contains("4111111111114242")));
        assert!(details.documents().is_empty());
    }

    #[test]
    fn test_finance_company_single_document() {
        let details = vm(json!({
            "_id": "a1",
            "installment": {
                "type": "financeCompany",
                "financeStatus": "pending",
                "customerInfo": { "fullName": "Trần Thị B", "monthlyIncome": 15000000 },
                "uploadedDocuments": { "incomeProof": "/uploads/income.jpg" }
            }
        }));

        let fields = details.customer_fields();
        assert_eq!(
            labels(&fields),
            vec![
                "Họ tên",
                "CMND/CCCD",
                "SĐT",
                "Email",
                "Địa chỉ",
                "Thu nhập/tháng",
                "SĐT người thân 1",
                "SĐT người thân 2"
            ]
        );
        assert_eq!(fields[5].value, "15.000.000\u{a0}₫");

        let docs = details.documents();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].label, "Giấy tờ thu nhập");
        assert_eq!(docs[0].name, "/uploads/income.jpg");
        assert!(docs[0].href.ends_with("/uploads/income.jpg"));
    }

    #[test]
    fn test_plan_fields() {
        let fields = credit_card_order("pending").plan_fields();
        assert_eq!(fields[0].value, "Thẻ tín dụng");
        assert_eq!(fields[2].value, "6 tháng");
        assert_eq!(fields[3].value, "0%/tháng");
        assert_eq!(fields[4].value, "4.331.667\u{a0}₫");
        assert_eq!(fields.last().map(|f| f.value.as_str()), Some("TXN-42"));

        let no_plan = vm(json!({ "_id": "x" })).plan_fields();
        assert_eq!(no_plan, vec![InfoField::new("Hình thức", "N/A")]);

        let sparse = vm(json!({
            "_id": "x",
            "installment": { "financeStatus": "pending", "months": null, "totalPayment": null }
        }))
        .plan_fields();
        assert_eq!(sparse[0].value, "Công ty tài chính");
        assert_eq!(sparse[1].value, "N/A");
        assert_eq!(sparse[2].value, "N/A");
        assert_eq!(sparse[3].value, "N/A");
        assert_eq!(sparse[5].value, "N/A");
    }

    #[test]
    fn test_order_fields_and_items() {
        let details = credit_card_order("approved");
        let fields = details.order_fields();
        assert_eq!(fields[0].value, "65f1c2a9e4b0a1b2c3d4e5f6");
        assert_eq!(fields[1].value, "14:02:26 15/3/2024");

        let items = details.items();
        assert_eq!(
            items,
            vec![ItemLine {
                name: "iPhone 15".into(),
                quantity: 1,
                price: "25.990.000\u{a0}₫".into(),
            }]
        );

        let unnamed = vm(json!({ "_id": "x", "items": [{ "productId": "p1", "quantity": 3 }] }));
        assert_eq!(unnamed.items()[0].name, "N/A");
        assert_eq!(unnamed.items()[0].price, "N/A");
    }
}
