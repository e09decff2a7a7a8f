pub mod adapter;
pub mod application;

pub use application::domain::{Publication, PublicationInput};
