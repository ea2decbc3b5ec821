//! Directory domain: search/filter/paginate over the catalog.

pub mod engine;
pub mod model;

pub use engine::{filter_catalog, is_eligible, paginate};
pub use model::{DirectoryPage, DirectoryQuery, PAGE_SIZE};
