use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Enums
// ============================================================================

/// Financing channel of an installment order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstallmentType {
    CreditCard,
    FinanceCompany,
}

impl InstallmentType {
    pub fn label(&self) -> &'static str {
        match self {
            InstallmentType::CreditCard => "Thẻ tín dụng",
            InstallmentType::FinanceCompany => "Công ty tài chính",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            InstallmentType::CreditCard => "💳",
            InstallmentType::FinanceCompany => "🏦",
        }
    }
}

/// Approval state of the financing application.
///
/// `Pending` is the only state with outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinanceStatus {
    Pending,
    Approved,
    Rejected,
}

impl FinanceStatus {
    pub const ALL: [FinanceStatus; 3] = [
        FinanceStatus::Pending,
        FinanceStatus::Approved,
        FinanceStatus::Rejected,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            FinanceStatus::Pending => "pending",
            FinanceStatus::Approved => "approved",
            FinanceStatus::Rejected => "rejected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FinanceStatus::Pending => "Chờ duyệt",
            FinanceStatus::Approved => "Đã duyệt",
            FinanceStatus::Rejected => "Đã từ chối",
        }
    }

    pub fn can_transition_to(&self, next: FinanceStatus) -> bool {
        matches!(
            (self, next),
            (FinanceStatus::Pending, FinanceStatus::Approved)
                | (FinanceStatus::Pending, FinanceStatus::Rejected)
        )
    }
}

/// Operator decision on a pending application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinanceDecision {
    Approve,
    Reject,
}

impl FinanceDecision {
    pub fn target_status(&self) -> FinanceStatus {
        match self {
            FinanceDecision::Approve => FinanceStatus::Approved,
            FinanceDecision::Reject => FinanceStatus::Rejected,
        }
    }
}

// ============================================================================
// Customer info (variant by installment type)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInfo {
    pub card_holder: Option<String>,
    pub card_number: Option<String>,
    pub bank: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl CreditCardInfo {
    /// Card number reduced to its last 4 digits: `**** 4242`
    pub fn masked_card_number(&self) -> Option<String> {
        let number = self.card_number.as_deref()?;
        let digits: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.is_empty() {
            return None;
        }
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        Some(format!("**** {}", tail))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceCompanyInfo {
    pub full_name: Option<String>,
    pub id_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub monthly_income: Option<f64>,
    pub relative_phone1: Option<String>,
    pub relative_phone2: Option<String>,
}

/// Applicant data; the variant always matches `installment.type`
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerInfo {
    CreditCard(CreditCardInfo),
    FinanceCompany(FinanceCompanyInfo),
}

impl CustomerInfo {
    pub fn empty(kind: InstallmentType) -> Self {
        match kind {
            InstallmentType::CreditCard => CustomerInfo::CreditCard(CreditCardInfo::default()),
            InstallmentType::FinanceCompany => {
                CustomerInfo::FinanceCompany(FinanceCompanyInfo::default())
            }
        }
    }

    pub fn installment_type(&self) -> InstallmentType {
        match self {
            CustomerInfo::CreditCard(_) => InstallmentType::CreditCard,
            CustomerInfo::FinanceCompany(_) => InstallmentType::FinanceCompany,
        }
    }

    /// Unreadable customer info degrades to the empty variant of `kind`
    fn from_wire(kind: InstallmentType, value: Option<Value>) -> Self {
        let parsed = value.and_then(|value| match kind {
            InstallmentType::CreditCard => {
                serde_json::from_value(value).ok().map(CustomerInfo::CreditCard)
            }
            InstallmentType::FinanceCompany => serde_json::from_value(value)
                .ok()
                .map(CustomerInfo::FinanceCompany),
        });
        parsed.unwrap_or_else(|| Self::empty(kind))
    }

    fn to_wire(&self) -> Option<Value> {
        match self {
            CustomerInfo::CreditCard(info) => serde_json::to_value(info).ok(),
            CustomerInfo::FinanceCompany(info) => serde_json::to_value(info).ok(),
        }
    }
}

// ============================================================================
// Uploaded documents
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    IdCardFront,
    IdCardBack,
    HouseholdBook,
    IncomeProof,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::IdCardFront => "CMND/CCCD (Mặt trước)",
            DocumentKind::IdCardBack => "CMND/CCCD (Mặt sau)",
            DocumentKind::HouseholdBook => "Sổ hộ khẩu",
            DocumentKind::IncomeProof => "Giấy tờ thu nhập",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedDocuments {
    pub id_card_front: Option<String>,
    pub id_card_back: Option<String>,
    pub household_book: Option<String>,
    pub income_proof: Option<String>,
}

impl UploadedDocuments {
    /// Present documents in display order; empty references are skipped
    pub fn entries(&self) -> Vec<(DocumentKind, &str)> {
        [
            (DocumentKind::IdCardFront, &self.id_card_front),
            (DocumentKind::IdCardBack, &self.id_card_back),
            (DocumentKind::HouseholdBook, &self.household_book),
            (DocumentKind::IncomeProof, &self.income_proof),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (kind, v))
        })
        .collect()
    }
}

// ============================================================================
// Installment plan
// ============================================================================

/// Financing plan of an order. All figures are computed by the backend;
/// a figure the backend did not send (or sent malformed) stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "InstallmentWire", into = "InstallmentWire")]
pub struct Installment {
    pub upfront: Option<f64>,
    pub months: Option<u32>,
    /// Percent per month
    pub interest_rate: Option<f64>,
    pub monthly_payment: Option<f64>,
    pub total_payment: Option<f64>,
    /// `None` when the status is missing or not one of the known codes
    pub finance_status: Option<FinanceStatus>,
    /// Raw status text the backend sent when it is not a known code
    pub unknown_status: Option<String>,
    pub transaction_id: Option<String>,
    pub customer_info: CustomerInfo,
    pub uploaded_documents: Option<UploadedDocuments>,
}

impl Installment {
    pub fn installment_type(&self) -> InstallmentType {
        self.customer_info.installment_type()
    }

    /// Label of a known status, otherwise the raw text from the backend
    pub fn status_label(&self) -> Option<&str> {
        match self.finance_status {
            Some(status) => Some(status.label()),
            None => self.unknown_status.as_deref(),
        }
    }

    /// Uploaded documents; only finance company applications carry them
    pub fn documents(&self) -> Vec<(DocumentKind, &str)> {
        match (&self.customer_info, &self.uploaded_documents) {
            (CustomerInfo::FinanceCompany(_), Some(docs)) => docs.entries(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstallmentWire {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    kind: Option<InstallmentType>,
    #[serde(default, deserialize_with = "lenient::optional")]
    upfront: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    months: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional")]
    interest_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    monthly_payment: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional")]
    total_payment: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    finance_status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    customer_info: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    uploaded_documents: Option<UploadedDocuments>,
}

impl From<InstallmentWire> for Installment {
    fn from(wire: InstallmentWire) -> Self {
        // Anything but a credit card plan is handled as a finance company application
        let kind = wire.kind.unwrap_or(InstallmentType::FinanceCompany);
        let status_text = wire
            .finance_status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let finance_status = status_text.as_deref().and_then(FinanceStatus::from_code);
        Self {
            upfront: wire.upfront,
            months: wire.months,
            interest_rate: wire.interest_rate,
            monthly_payment: wire.monthly_payment,
            total_payment: wire.total_payment,
            unknown_status: status_text.filter(|_| finance_status.is_none()),
            finance_status,
            transaction_id: wire.transaction_id.filter(|t| !t.is_empty()),
            customer_info: CustomerInfo::from_wire(kind, wire.customer_info),
            uploaded_documents: wire.uploaded_documents,
        }
    }
}

impl From<Installment> for InstallmentWire {
    fn from(installment: Installment) -> Self {
        Self {
            kind: Some(installment.installment_type()),
            upfront: installment.upfront,
            months: installment.months,
            interest_rate: installment.interest_rate,
            monthly_payment: installment.monthly_payment,
            total_payment: installment.total_payment,
            finance_status: installment
                .finance_status
                .map(|s| s.code().to_string())
                .or(installment.unknown_status),
            transaction_id: installment.transaction_id,
            customer_info: installment.customer_info.to_wire(),
            uploaded_documents: installment.uploaded_documents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_transitions() {
        use FinanceStatus::*;
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Pending));
        for terminal in [Approved, Rejected] {
            for next in FinanceStatus::ALL {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(FinanceStatus::from_code("approved"), Some(FinanceStatus::Approved));
        assert_eq!(FinanceStatus::from_code("all"), None);
        assert_eq!(
            serde_json::to_value(FinanceStatus::Rejected).unwrap(),
            json!("rejected")
        );
        assert_eq!(FinanceDecision::Reject.target_status(), FinanceStatus::Rejected);
    }

    #[test]
    fn test_credit_card_installment() {
        let installment: Installment = serde_json::from_value(json!({
            "type": "creditCard",
            "upfront": 0,
            "months": 6,
            "interestRate": 0,
            "monthlyPayment": 2500000,
            "totalPayment": 15000000,
            "financeStatus": "pending",
            "transactionId": "TXN-001",
            "customerInfo": {
                "cardHolder": "NGUYEN VAN A",
                "cardNumber": "4111 1111 1111 4242",
                "bank": "Vietcombank",
                "fullName": "ignored",
                "monthlyIncome": 20000000
            },
            "uploadedDocuments": { "incomeProof": "income.pdf" }
        }))
        .unwrap();

        assert_eq!(installment.installment_type(), InstallmentType::CreditCard);
        assert_eq!(installment.transaction_id.as_deref(), Some("TXN-001"));
        match &installment.customer_info {
            CustomerInfo::CreditCard(info) => {
                assert_eq!(info.card_holder.as_deref(), Some("NGUYEN VAN A"));
                assert_eq!(info.masked_card_number().as_deref(), Some("**** 4242"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        assert!(installment.documents().is_empty());
    }

    #[test]
    fn test_finance_company_installment() {
        let installment: Installment = serde_json::from_value(json!({
            "type": "financeCompany",
            "months": 12,
            "interestRate": 1.5,
            "financeStatus": "approved",
            "customerInfo": {
                "fullName": "Trần Thị B",
                "idNumber": "079123456789",
                "monthlyIncome": 15000000,
                "relativePhone1": "0901234567",
                "relativePhone2": "0907654321"
            },
            "uploadedDocuments": { "incomeProof": "uploads/income.jpg", "idCardBack": "" }
        }))
        .unwrap();

        assert_eq!(installment.finance_status, Some(FinanceStatus::Approved));
        assert_eq!(installment.upfront, None);
        assert_eq!(installment.months, Some(12));
        match &installment.customer_info {
            CustomerInfo::FinanceCompany(info) => {
                assert_eq!(info.full_name.as_deref(), Some("Trần Thị B"));
                assert_eq!(info.monthly_income, Some(15_000_000.0));
                assert_eq!(info.relative_phone2.as_deref(), Some("0907654321"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        assert_eq!(
            installment.documents(),
            vec![(DocumentKind::IncomeProof, "uploads/income.jpg")]
        );
    }

    #[test]
    fn test_missing_customer_info_and_status() {
        let installment: Installment =
            serde_json::from_value(json!({ "type": "financeCompany", "customerInfo": null }))
                .unwrap();
        assert_eq!(installment.finance_status, None);
        assert_eq!(installment.status_label(), None);
        assert_eq!(
            installment.customer_info,
            CustomerInfo::FinanceCompany(FinanceCompanyInfo::default())
        );
    }

    #[test]
    fn test_unknown_status_keeps_raw_text() {
        let installment: Installment = serde_json::from_value(json!({
            "type": "creditCard",
            "financeStatus": "cancelled"
        }))
        .unwrap();
        assert_eq!(installment.finance_status, None);
        assert_eq!(installment.unknown_status.as_deref(), Some("cancelled"));
        assert_eq!(installment.status_label(), Some("cancelled"));

        let known: Installment =
            serde_json::from_value(json!({ "financeStatus": "rejected" })).unwrap();
        assert_eq!(known.status_label(), Some("Đã từ chối"));
        assert_eq!(known.unknown_status, None);
    }

    #[test]
    fn test_malformed_fields_degrade() {
        let missing_type: Installment = serde_json::from_value(json!({
            "months": null,
            "monthlyPayment": null,
            "totalPayment": "abc",
            "customerInfo": { "fullName": "Lê C" }
        }))
        .unwrap();
        assert_eq!(missing_type.installment_type(), InstallmentType::FinanceCompany);
        assert_eq!(missing_type.months, None);
        assert_eq!(missing_type.monthly_payment, None);
        assert_eq!(missing_type.total_payment, None);

        let unknown_type: Installment =
            serde_json::from_value(json!({ "type": "cash", "financeStatus": "pending" })).unwrap();
        assert_eq!(unknown_type.installment_type(), InstallmentType::FinanceCompany);
        assert_eq!(unknown_type.finance_status, Some(FinanceStatus::Pending));

        let bad_info: Installment = serde_json::from_value(json!({
            "type": "creditCard",
            "customerInfo": "not an object",
            "uploadedDocuments": 42
        }))
        .unwrap();
        assert_eq!(
            bad_info.customer_info,
            CustomerInfo::CreditCard(CreditCardInfo::default())
        );
        assert_eq!(bad_info.uploaded_documents, None);
    }

    #[test]
    fn test_serialize_keeps_wire_shape() {
        let installment = Installment {
            upfront: Some(1_000_000.0),
            months: Some(3),
            interest_rate: Some(0.0),
            monthly_payment: Some(3_000_000.0),
            total_payment: None,
            finance_status: Some(FinanceStatus::Pending),
            unknown_status: None,
            transaction_id: None,
            customer_info: CustomerInfo::CreditCard(CreditCardInfo {
                bank: Some("ACB".into()),
                ..Default::default()
            }),
            uploaded_documents: None,
        };
        let value = serde_json::to_value(&installment).unwrap();
        assert_eq!(value["type"], json!("creditCard"));
        assert_eq!(value["customerInfo"]["bank"], json!("ACB"));
        assert_eq!(value["financeStatus"], json!("pending"));
        assert!(value.get("transactionId").is_none());

        let back: Installment = serde_json::from_value(value).unwrap();
        assert_eq!(back, installment);
    }

    #[test]
    fn test_masked_card_number_short_and_missing() {
        let short = CreditCardInfo {
            card_number: Some("12".into()),
            ..Default::default()
        };
        assert_eq!(short.masked_card_number().as_deref(), Some("**** 12"));
        assert_eq!(CreditCardInfo::default().masked_card_number(), None);
    }
}
