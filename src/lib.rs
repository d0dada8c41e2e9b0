pub mod dataset;
pub mod http;
pub mod quality;
pub mod report;
