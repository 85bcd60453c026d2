pub mod auth_controller;
pub mod reservation_controller;
pub mod vehicule_controller;
