pub mod generate;
pub mod verify;
