pub mod graph;
pub mod report;
pub mod sale;

pub use graph::*;
pub use report::*;
pub use sale::*;
