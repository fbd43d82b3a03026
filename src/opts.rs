pub mod fetch_opts;

pub use crate::opts::fetch_opts::FetchOpts;
