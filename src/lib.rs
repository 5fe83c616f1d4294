pub mod catalog;
pub mod expression;
pub mod relation;
pub mod session;
