pub mod clipboard;
pub mod password;
