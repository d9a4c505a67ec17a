pub mod app;
pub mod board_state;
pub mod listing_board;
pub mod notification_stack;
pub mod report_form;
pub mod simulated_backend;
