pub mod download;
pub mod inference;
pub mod observability;
pub mod staging;
