pub mod pool;
pub mod rate_limiter;
