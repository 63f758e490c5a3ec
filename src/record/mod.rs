/*! Record parsing

Raw records are status objects, one per line. [Record] resolves the wire [status::Status]
into one of a closed set of shapes, and [ResolvedText] is what downstream filters see.
!*/
mod resolve;
pub mod status;

pub use resolve::{Body, Record, RecordKind, ResolvedText};
