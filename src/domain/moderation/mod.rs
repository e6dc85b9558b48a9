pub mod audit;
pub mod content_filter;
pub mod role;
pub mod status;
