pub mod customer;
pub mod feature;
pub mod module;
pub mod onboarding;
