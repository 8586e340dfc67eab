pub mod library;
pub mod domain;
pub mod events;
pub mod command;
