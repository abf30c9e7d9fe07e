pub mod main_layout;
