//! Infrastructure adapters

mod reqwest_catalog;
mod system_clock;

pub use reqwest_catalog::ReqwestGameCatalog;
pub use system_clock::SystemClock;
