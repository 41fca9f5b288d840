//! Data models shared between the server and its clients

pub mod product;

pub use product::{ProductDraft, ProductRecord};
