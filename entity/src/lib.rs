pub mod account;
pub mod booking;
pub mod car;
pub mod car_inspection;
pub mod driver_license;
pub mod notification;
pub mod parking_address;
pub mod rental_service;
pub mod role;
pub mod session;
pub mod status;
pub mod user;
