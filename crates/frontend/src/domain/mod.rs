pub mod a001_installment_order;
