//! Settings shared by the fetcher and the command line front end

pub mod config;
pub mod constants;
pub mod logging;
