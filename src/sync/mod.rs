pub mod document;
pub mod gateway;
pub mod session;
pub mod sheet;
