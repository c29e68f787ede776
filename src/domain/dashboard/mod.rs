pub mod pipeline;

pub use pipeline::{PipelineSummary, ProductRevenue, SaleTypeValue, StageValue};
