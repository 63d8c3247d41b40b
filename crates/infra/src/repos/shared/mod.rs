pub mod inmemory_repo;
pub mod postgres;
