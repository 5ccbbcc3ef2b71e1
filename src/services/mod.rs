pub mod customer_view;
pub mod feature_board;
pub mod seeding;
pub mod taxonomy;
pub mod wizard;
