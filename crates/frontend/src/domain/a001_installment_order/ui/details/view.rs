use super::view_model::{InfoField, InstallmentOrderDetailsViewModel};
use crate::domain::a001_installment_order::ui::status_badge::FinanceStatusBadge;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_installment_order::aggregate::InstallmentOrder;
use contracts::domain::a001_installment_order::installment::FinanceDecision;
use leptos::children::ToChildren;
use leptos::prelude::*;
use thaw::*;

fn info_items(fields: Vec<InfoField>) -> impl IntoView {
    fields
        .into_iter()
        .map(|field| {
            view! {
                <div class="info-item">
                    <strong>{format!("{}:", field.label)}</strong>
                    " "
                    {field.value}
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn InstallmentOrderDetails(
    order: InstallmentOrder,
    /// A status update request is in flight
    #[prop(into)]
    updating: Signal<bool>,
    on_decision: Callback<FinanceDecision>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = InstallmentOrderDetailsViewModel::new(order);
    let status = vm.status();
    let status_label = vm.status_label();
    let documents = vm.documents();
    let footer_actions = vm.footer_actions();

    let footer = ChildrenFn::to_children(move || {
        footer_actions
            .iter()
            .copied()
            .map(|action| match action.decision() {
                Some(decision) => {
                    let (appearance, icon_name) = match decision {
                        FinanceDecision::Approve => (ButtonAppearance::Primary, "check"),
                        FinanceDecision::Reject => (ButtonAppearance::Secondary, "ban"),
                    };
                    view! {
                        <Button
                            appearance=appearance
                            disabled=updating
                            on_click=move |_| on_decision.run(decision)
                        >
                            {icon(icon_name)}
                            {format!(" {}", action.label())}
                        </Button>
                    }
                    .into_any()
                }
                None => view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {action.label()}
                    </Button>
                }
                .into_any(),
            })
            .collect_view()
    });

    view! {
        <Modal
            title="Chi tiết đơn hàng trả góp"
            on_close=on_close
            modal_class="installment-details-modal"
            footer=footer
        >
            <section class="detail-section">
                <h4>"Thông tin đơn hàng"</h4>
                <div class="info-grid">
                    {info_items(vm.order_fields())}
                    <div class="info-item">
                        <strong>"Trạng thái:"</strong>
                        " "
                        <FinanceStatusBadge status=status label=status_label />
                    </div>
                </div>
            </section>

            <section class="detail-section">
                <h4>"Thông tin trả góp"</h4>
                <div class="info-grid">{info_items(vm.plan_fields())}</div>
            </section>

            <section class="detail-section">
                <h4>"Thông tin khách hàng"</h4>
                <div class="info-grid">{info_items(vm.customer_fields())}</div>
            </section>

            {(!documents.is_empty()).then(|| view! {
                <section class="detail-section">
                    <h4>"Giấy tờ đã upload"</h4>
                    <div class="documents-list">
                        {documents.into_iter().map(|doc| view! {
                            <div class="document-item">
                                <span class="document-icon">{icon("file")}</span>
                                <a class="document-name" href=doc.href target="_blank" rel="noopener noreferrer">
                                    {format!("{}: {}", doc.label, doc.name)}
                                </a>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            })}

            <section class="detail-section">
                <h4>"Sản phẩm"</h4>
                <div class="products-list">
                    {vm.items().into_iter().map(|item| view! {
                        <div class="product-item">
                            <strong>{item.name}</strong>
                            <br />
                            <small>{format!("Số lượng: {} - Giá: {}", item.quantity, item.price)}</small>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </Modal>
    }
}
