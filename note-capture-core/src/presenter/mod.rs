pub mod full_screen;
pub mod photo;
pub mod video;
