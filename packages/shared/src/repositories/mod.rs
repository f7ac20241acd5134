pub mod errors;
pub mod match_repository;
pub mod queue_repository;
pub mod text_repository;
