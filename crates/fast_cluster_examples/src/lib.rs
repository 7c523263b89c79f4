#![forbid(unsafe_code)]

mod page;

pub use page::{init_tracing, write_page, PageConfig};
