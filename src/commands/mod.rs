pub mod add;
pub mod config;
pub mod find;
pub mod gen;
pub mod list;
