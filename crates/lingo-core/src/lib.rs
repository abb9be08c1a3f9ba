pub mod document;
pub mod draft;
pub mod filter;
pub mod preprocess;
