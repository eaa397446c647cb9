use contracts::domain::a001_installment_order::installment::FinanceStatus;
use leptos::prelude::*;
use thaw::*;

fn badge_color(status: Option<FinanceStatus>) -> BadgeColor {
    match status {
        Some(FinanceStatus::Pending) => BadgeColor::Warning,
        Some(FinanceStatus::Approved) => BadgeColor::Success,
        Some(FinanceStatus::Rejected) => BadgeColor::Danger,
        None => BadgeColor::Subtle,
    }
}

/// Finance status rendered as a tinted badge.
///
/// `label` is shown as-is so unknown backend statuses keep their raw text.
#[component]
pub fn FinanceStatusBadge(
    status: Option<FinanceStatus>,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(status)>
            {label}
        </Badge>
    }
}
