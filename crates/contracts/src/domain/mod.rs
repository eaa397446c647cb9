pub mod a001_installment_order;
pub mod common;
