pub mod executor_factory;
pub mod sequential_executor;
pub mod worker_pool_executor;
