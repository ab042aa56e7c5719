pub mod api;
pub mod classify;
pub mod config;
pub mod consts;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod stats;

pub use crate::classify::{classify, Category, CategorySet};
pub use crate::error::{KeyStatError, KsResult};
pub use crate::layouts::LayoutMapping;
pub use crate::stats::{Analysis, Analyzer};
