//! File processors built on the client

pub mod locale;
