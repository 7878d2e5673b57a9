//! Row structs mapped from database tables.

pub mod producer;
