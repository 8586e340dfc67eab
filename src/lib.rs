pub mod core;
pub mod utils;
pub mod books;
pub mod patrons;
pub mod fines;
pub mod gateway;
pub mod loans;
