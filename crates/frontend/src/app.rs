use crate::domain::a001_installment_order::ui::list::InstallmentOrderList;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="admin-page">
                <InstallmentOrderList />
            </main>
        </ConfigProvider>
    }
}
