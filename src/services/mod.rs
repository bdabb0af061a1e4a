// Service module exports

pub mod booking;
pub mod settings;
pub mod validation;
