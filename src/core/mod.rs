pub mod cleaning;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{CleanResult, Record, Summary, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
