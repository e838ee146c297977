//! Statistical methods for timing series.
//!
//! - Linear-interpolation quantiles and five-point summaries
//! - Expanding-window quantile tables indexed by isolated time
//! - Descriptive statistics per timing series

mod quantile;

pub use quantile::{
    cumulative_quantiles, cumulative_quantiles_range, describe, five_point_sorted, quantile,
    quantile_sorted, QuantileRow, Summary,
};
