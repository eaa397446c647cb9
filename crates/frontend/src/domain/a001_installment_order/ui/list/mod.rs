pub mod row;
pub mod state;

use self::row::InstallmentOrderRow;
use self::state::{create_state, InstallmentOrderListState, ReviewCommand, ReviewEvent};
use super::details::InstallmentOrderDetails;
use super::status_badge::FinanceStatusBadge;
use crate::domain::a001_installment_order::api;
use crate::shared::icons::icon;
use contracts::domain::a001_installment_order::dto::FinanceStatusFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const COLUMN_COUNT: &str = "8";

/// Apply an event to the page state and run the resulting commands
fn dispatch(state: RwSignal<InstallmentOrderListState>, event: ReviewEvent) {
    // The page may have been closed while a request was in flight
    let Some((next, commands)) = state.try_with_untracked(|s| s.apply(event)) else {
        return;
    };
    state.set(next);
    for command in commands {
        run_command(state, command);
    }
}

fn run_command(state: RwSignal<InstallmentOrderListState>, command: ReviewCommand) {
    match command {
        ReviewCommand::FetchOrders(filter) => spawn_local(async move {
            match api::fetch_installment_orders(filter).await {
                Ok(orders) => {
                    log::debug!(
                        "Loaded {} installment orders (filter: {})",
                        orders.len(),
                        filter.value()
                    );
                    dispatch(state, ReviewEvent::OrdersLoaded(orders));
                }
                Err(e) => {
                    log::error!("Failed to fetch installment orders: {}", e);
                    dispatch(state, ReviewEvent::OrdersFailed);
                }
            }
        }),
        ReviewCommand::Confirm {
            order_id,
            decision,
            prompt,
        } => {
            let confirmed = web_sys::window()
                .and_then(|win| win.confirm_with_message(&prompt).ok())
                .unwrap_or(false);
            let event = if confirmed {
                ReviewEvent::DecisionConfirmed { order_id, decision }
            } else {
                ReviewEvent::DecisionDeclined
            };
            dispatch(state, event);
        }
        ReviewCommand::UpdateStatus { order_id, decision } => spawn_local(async move {
            match api::update_installment_status(&order_id, decision).await {
                Ok(()) => {
                    log::info!(
                        "Installment order {} set to {}",
                        order_id,
                        decision.target_status().code()
                    );
                    dispatch(state, ReviewEvent::UpdateSucceeded(decision));
                }
                Err(e) => {
                    log::error!("Failed to update installment order {}: {}", order_id, e);
                    let message = e.backend_message().map(str::to_string);
                    dispatch(state, ReviewEvent::UpdateFailed(message));
                }
            }
        }),
        ReviewCommand::Notify(message) | ReviewCommand::Alert(message) => {
            if let Some(win) = web_sys::window() {
                let _ = win.alert_with_message(&message);
            }
        }
    }
}

fn single_row(content: impl IntoView + 'static) -> AnyView {
    view! {
        <TableRow>
            <TableCell attr:colspan=COLUMN_COUNT attr:style="padding: 40px; text-align: center; color: var(--colorNeutralForeground3);">
                {content}
            </TableCell>
        </TableRow>
    }
    .into_any()
}

#[component]
pub fn InstallmentOrderList() -> impl IntoView {
    let state = create_state();
    let filter_value = RwSignal::new(FinanceStatusFilter::default().value().to_string());

    // Only real user changes of the select reach the state machine
    Effect::new(move |prev: Option<String>| {
        let value = filter_value.get();
        if prev.is_some() && prev.as_ref() != Some(&value) {
            dispatch(
                state,
                ReviewEvent::FilterChanged(FinanceStatusFilter::from_value(&value)),
            );
        }
        value
    });

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let updating = Signal::derive(move || state.with(|s| s.updating));
    let selected = Memo::new(move |_| {
        state.with(|s| {
            if s.show_details {
                s.selected.clone()
            } else {
                None
            }
        })
    });

    dispatch(state, ReviewEvent::Mounted);

    view! {
        <div class="installment-orders-container" style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <Flex align=FlexAlign::Center gap=FlexGap::Medium>
                    <h2 style="margin: 0; font-size: 24px; font-weight: bold;">"Quản lý đơn hàng trả góp"</h2>
                    <span style="color: var(--colorNeutralForeground3);">
                        {move || format!("{} đơn", state.with(|s| s.visible_orders().len()))}
                    </span>
                </Flex>
                <Space>
                    <Flex align=FlexAlign::Center gap=FlexGap::Small>
                        <label>"Trạng thái:"</label>
                        <Select value=filter_value>
                            {FinanceStatusFilter::ALL
                                .into_iter()
                                .map(|filter| view! { <option value=filter.value()>{filter.label()}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| dispatch(state, ReviewEvent::RefreshRequested)
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Làm mới"
                    </Button>
                </Space>
            </Flex>

            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <div class="error-message" style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px; display: flex; align-items: center; gap: 8px; margin-bottom: 16px;">
                    <span style="color: var(--color-error); font-size: 18px;">"⚠"</span>
                    <span style="color: var(--color-error);">{err}</span>
                </div>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 110px;">"Mã đơn"</TableHeaderCell>
                        <TableHeaderCell>"Khách hàng"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 180px;">"Hình thức"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px;">"Số tiền/tháng"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px;">"Tổng tiền"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 120px;">"Trạng thái"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 170px;">"Ngày tạo"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px; text-align: center;">"Thao tác"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() {
                            return single_row(view! {
                                <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                    <Spinner />
                                    "Đang tải..."
                                </Flex>
                            });
                        }
                        let orders = state.with(|s| s.visible_orders());
                        if orders.is_empty() {
                            return single_row("Không có đơn hàng trả góp nào");
                        }
                        orders.iter().map(InstallmentOrderRow::from).map(|row| {
                            let id = row.id.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <code>{row.code}</code>
                                    </TableCell>
                                    <TableCell>
                                        <div>
                                            {row.customer_name}
                                            <br />
                                            <small style="color: var(--colorNeutralForeground3);">
                                                {row.customer_email}
                                            </small>
                                        </div>
                                    </TableCell>
                                    <TableCell>{row.installment_type}</TableCell>
                                    <TableCell>{row.monthly_payment}</TableCell>
                                    <TableCell>{row.total}</TableCell>
                                    <TableCell>
                                        <FinanceStatusBadge status=row.status label=row.status_label />
                                    </TableCell>
                                    <TableCell>{row.created_at}</TableCell>
                                    <TableCell>
                                        <div style="text-align: center;">
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| {
                                                    log::debug!("Opening installment order {}", id);
                                                    dispatch(state, ReviewEvent::DetailsOpened(id.clone()));
                                                }
                                            >
                                                {icon("eye")}
                                                " Xem chi tiết"
                                            </Button>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>

            {move || selected.get().map(|order| view! {
                <InstallmentOrderDetails
                    order=order
                    updating=updating
                    on_decision=Callback::new(move |decision| {
                        dispatch(state, ReviewEvent::DecisionRequested(decision));
                    })
                    on_close=Callback::new(move |_| dispatch(state, ReviewEvent::DetailsClosed))
                />
            })}
        </div>
    }
}
