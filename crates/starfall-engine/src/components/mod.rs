pub mod star;
pub mod meteor;
