use super::installment::{FinanceStatus, Installment, InstallmentType};
use crate::domain::common::{lenient, Populated};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Backend order id, treated as an opaque string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstallmentOrderId(pub String);

impl InstallmentOrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Last 8 characters, used as the order code in the list
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        chars[chars.len().saturating_sub(8)..].iter().collect()
    }
}

impl fmt::Display for InstallmentOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Referenced documents
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "productId", default, deserialize_with = "lenient::optional")]
    pub product: Option<Populated<ProductRef>>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub quantity: u32,
    /// Unit price
    #[serde(default, deserialize_with = "lenient::optional")]
    pub price: Option<f64>,
}

impl OrderItem {
    pub fn product_name(&self) -> Option<&str> {
        self.product
            .as_ref()
            .and_then(Populated::document)
            .and_then(|p| p.name.as_deref())
    }
}

// ============================================================================
// Order
// ============================================================================

/// Order paid through an installment plan, as returned by the admin listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentOrder {
    #[serde(rename = "_id")]
    pub id: InstallmentOrderId,

    #[serde(rename = "customerId", default, deserialize_with = "lenient::optional")]
    pub customer: Option<Populated<CustomerRef>>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub items: Vec<OrderItem>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub total: Option<f64>,

    #[serde(rename = "createdAt", default, deserialize_with = "lenient::optional")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub installment: Option<Installment>,
}

impl InstallmentOrder {
    fn customer_ref(&self) -> Option<&CustomerRef> {
        self.customer.as_ref().and_then(Populated::document)
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_ref().and_then(|c| c.name.as_deref())
    }

    pub fn customer_email(&self) -> Option<&str> {
        self.customer_ref().and_then(|c| c.email.as_deref())
    }

    pub fn finance_status(&self) -> Option<FinanceStatus> {
        self.installment.as_ref().and_then(|i| i.finance_status)
    }

    pub fn status_label(&self) -> Option<&str> {
        self.installment.as_ref().and_then(Installment::status_label)
    }

    pub fn installment_type(&self) -> Option<InstallmentType> {
        self.installment.as_ref().map(Installment::installment_type)
    }
}
