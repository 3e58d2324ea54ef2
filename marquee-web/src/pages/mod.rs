//! Full page handlers

pub mod home;

pub use home::{home_page, render_page};
