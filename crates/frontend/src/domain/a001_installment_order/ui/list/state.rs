use contracts::domain::a001_installment_order::aggregate::{InstallmentOrder, InstallmentOrderId};
use contracts::domain::a001_installment_order::dto::FinanceStatusFilter;
use contracts::domain::a001_installment_order::installment::FinanceDecision;
use leptos::prelude::*;

pub const LOAD_ERROR: &str = "Lỗi tải danh sách đơn trả góp";
pub const UNKNOWN_ERROR: &str = "Lỗi không xác định";

/// Something that happened in the view or on the network
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewEvent {
    Mounted,
    FilterChanged(FinanceStatusFilter),
    RefreshRequested,
    OrdersLoaded(Vec<InstallmentOrder>),
    OrdersFailed,
    DetailsOpened(InstallmentOrderId),
    DetailsClosed,
    DecisionRequested(FinanceDecision),
    DecisionConfirmed {
        order_id: InstallmentOrderId,
        decision: FinanceDecision,
    },
    DecisionDeclined,
    UpdateSucceeded(FinanceDecision),
    /// Carries the backend message when there was one
    UpdateFailed(Option<String>),
}

/// Side effect the view has to run after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewCommand {
    FetchOrders(FinanceStatusFilter),
    Confirm {
        order_id: InstallmentOrderId,
        decision: FinanceDecision,
        prompt: String,
    },
    UpdateStatus {
        order_id: InstallmentOrderId,
        decision: FinanceDecision,
    },
    Notify(String),
    Alert(String),
}

pub fn confirmation_prompt(decision: FinanceDecision) -> String {
    let verb = match decision {
        FinanceDecision::Approve => "DUYỆT",
        FinanceDecision::Reject => "TỪ CHỐI",
    };
    format!("Bạn có chắc muốn {} hồ sơ này?", verb)
}

pub fn success_message(decision: FinanceDecision) -> String {
    let verb = match decision {
        FinanceDecision::Approve => "Duyệt",
        FinanceDecision::Reject => "Từ chối",
    };
    format!("{} hồ sơ thành công!", verb)
}

pub fn failure_message(backend_message: Option<&str>) -> String {
    format!(
        "Lỗi cập nhật trạng thái: {}",
        backend_message.unwrap_or(UNKNOWN_ERROR)
    )
}

/// State of the installment review page, scoped to the list component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstallmentOrderListState {
    pub orders: Vec<InstallmentOrder>,
    pub filter: FinanceStatusFilter,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<InstallmentOrder>,
    pub show_details: bool,
    /// A status update request is in flight
    pub updating: bool,
}

impl InstallmentOrderListState {
    /// Orders to render; rows outside the active filter are never shown
    pub fn visible_orders(&self) -> Vec<InstallmentOrder> {
        self.orders
            .iter()
            .filter(|o| self.filter.matches(o.finance_status()))
            .cloned()
            .collect()
    }

    fn start_fetch(&mut self) -> ReviewCommand {
        self.loading = true;
        self.error = None;
        ReviewCommand::FetchOrders(self.filter)
    }

    fn close_details(&mut self) {
        self.show_details = false;
        self.selected = None;
    }

    /// The open order is `order_id` and may still take `decision`
    fn can_decide(&self, order_id: &InstallmentOrderId, decision: FinanceDecision) -> bool {
        self.show_details
            && self.selected.as_ref().is_some_and(|o| {
                &o.id == order_id
                    && o
                        .finance_status()
                        .is_some_and(|s| s.can_transition_to(decision.target_status()))
            })
    }

    /// Compute the next state and the commands to run. `self` is left untouched.
    pub fn apply(&self, event: ReviewEvent) -> (Self, Vec<ReviewCommand>) {
        let mut next = self.clone();
        let mut commands = Vec::new();

        match event {
            ReviewEvent::Mounted | ReviewEvent::RefreshRequested => {
                commands.push(next.start_fetch());
            }
            ReviewEvent::FilterChanged(filter) => {
                if filter != next.filter {
                    next.filter = filter;
                    commands.push(next.start_fetch());
                }
            }
            ReviewEvent::OrdersLoaded(orders) => {
                next.orders = orders;
                next.loading = false;
            }
            ReviewEvent::OrdersFailed => {
                next.error = Some(LOAD_ERROR.to_string());
                next.loading = false;
            }
            ReviewEvent::DetailsOpened(id) => {
                if let Some(order) = next.orders.iter().find(|o| o.id == id).cloned() {
                    next.selected = Some(order);
                    next.show_details = true;
                }
            }
            ReviewEvent::DetailsClosed => next.close_details(),
            ReviewEvent::DecisionRequested(decision) => {
                if let Some(order) = next.selected.as_ref() {
                    if !next.updating && next.can_decide(&order.id, decision) {
                        commands.push(ReviewCommand::Confirm {
                            order_id: order.id.clone(),
                            decision,
                            prompt: confirmation_prompt(decision),
                        });
                    }
                }
            }
            ReviewEvent::DecisionConfirmed { order_id, decision } => {
                if !next.updating && next.can_decide(&order_id, decision) {
                    next.updating = true;
                    commands.push(ReviewCommand::UpdateStatus { order_id, decision });
                }
            }
            ReviewEvent::DecisionDeclined => {}
            ReviewEvent::UpdateSucceeded(decision) => {
                next.updating = false;
                next.close_details();
                commands.push(ReviewCommand::Notify(success_message(decision)));
                commands.push(next.start_fetch());
            }
            ReviewEvent::UpdateFailed(message) => {
                next.updating = false;
                commands.push(ReviewCommand::Alert(failure_message(message.as_deref())));
            }
        }

        (next, commands)
    }
}

// Create state within component scope so it is disposed with the page
pub fn create_state() -> RwSignal<InstallmentOrderListState> {
    RwSignal::new(InstallmentOrderListState::default())
}
