pub mod button;
pub mod header;
pub mod more_menu;
