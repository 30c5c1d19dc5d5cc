pub mod chart;
pub mod config;
pub mod dedup;
pub mod filter;
pub mod join;
pub mod kpi;
pub mod normalize;
pub mod pipeline;
