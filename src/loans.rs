pub mod domain;
pub mod dto;
pub mod command;
pub mod factory;
