pub mod handlers;
pub mod sectionizer;
