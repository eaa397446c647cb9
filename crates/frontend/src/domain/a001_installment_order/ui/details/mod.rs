//! Installment order details modal
//!
//! Simplified MVVM split:
//! - view_model.rs: presentation of the order (fields, documents, footer actions)
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::InstallmentOrderDetails;
