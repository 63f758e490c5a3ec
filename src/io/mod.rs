/*!
# IO utilities

Graph saving and loading.

Loading is only used to check generated outputs.
!*/
pub mod reader;
pub mod writer;
