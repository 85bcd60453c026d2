pub mod reservation_repository;
pub mod user_repository;
pub mod vehicule_repository;
