/*! Record sources

A source is any iterator of `Result<String, Error>`, one raw record per item.
Recoverable errors ([crate::error::Error::is_recoverable]) invalidate a single record,
any other error is an upstream failure.
!*/
mod jsonl;

pub use jsonl::JsonLines;
