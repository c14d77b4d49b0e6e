pub mod application;
pub mod email;
