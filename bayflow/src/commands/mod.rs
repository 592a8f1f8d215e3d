pub mod common;
pub mod dashboard;
pub mod decision;
pub mod history;
pub mod init;
pub mod invoice;
pub mod job;
pub mod stage;
pub mod status;
pub mod task;

pub use common::ShopContext;
