pub mod cors;
pub mod panic;
