pub mod controls;
pub mod nav;
pub mod pages;
pub mod window;
