pub mod entry;
pub mod greeting;
