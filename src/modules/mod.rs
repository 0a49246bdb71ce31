pub mod auth;
pub mod booking;
pub mod car;
pub mod car_inspection;
pub mod common;
pub mod driver_license;
pub mod notification;
pub mod parking_address;
pub mod rental_service;
pub mod report;
pub mod role;
pub mod status;
pub mod user;
