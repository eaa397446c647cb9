pub mod aggregate;
pub mod dto;
pub mod installment;
