pub mod assessment;
pub mod cover_letter;
pub mod quiz;
pub mod user;
