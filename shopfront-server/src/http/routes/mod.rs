//! Route handlers organized by resource

pub mod locations;
pub mod root;
pub mod services;
pub mod testimonials;
