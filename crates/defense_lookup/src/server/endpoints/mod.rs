pub mod defense;
pub mod status;
