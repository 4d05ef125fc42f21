// Resume text intake: plain text arrives already extracted upstream and is
// kept in a JSON file that ranking can read back.

pub mod handlers;
pub mod store;

pub use store::{ResumeTextStore, StoreError};
