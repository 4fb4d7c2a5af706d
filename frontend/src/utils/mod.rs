pub mod analytics;
pub mod dom;
pub mod rate_limit;
pub mod storage;
