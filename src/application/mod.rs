pub mod audit;
pub mod catalog;
pub mod documents;
pub mod fleet;
pub mod inventory;
pub mod mailer;
pub mod procurement;
pub mod reports;
pub mod sales;
pub mod service;
pub mod settings;
