pub mod naming;
pub mod builder;
pub mod repair;
