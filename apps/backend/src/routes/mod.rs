pub mod study;
pub mod words;
