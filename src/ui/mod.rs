pub mod main_window;
pub mod nav_bar;
pub mod overlay;
pub mod page;
pub mod sections;
pub mod theme;
