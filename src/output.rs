#![forbid(unsafe_code)]

//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
