pub mod audit;
pub mod catalog;
pub mod documents;
pub mod entity;
pub mod fleet;
pub mod inventory;
pub mod mail;
pub mod ports;
pub mod procurement;
pub mod sales;
pub mod settings;
