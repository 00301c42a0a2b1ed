pub mod activity_dashboard;
pub mod counter_panel;
pub mod ratio_bar;
pub mod reset_button;
pub mod top_keys;
