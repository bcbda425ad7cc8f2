pub mod locations;
pub mod persistence;
