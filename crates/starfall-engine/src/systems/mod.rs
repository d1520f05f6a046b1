pub mod starfield;
pub mod meteors;
