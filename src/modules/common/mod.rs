pub mod crud;
pub mod dto;
pub mod error_codes;
pub mod extractors;
pub mod responses;
