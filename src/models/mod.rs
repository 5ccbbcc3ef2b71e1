pub mod category;
pub mod customer;
pub mod feature;
pub mod module;
pub mod product;
pub mod profile;
pub mod stock_transaction;
