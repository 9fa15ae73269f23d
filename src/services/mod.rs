pub mod artist_service;
pub mod context;
pub mod home_service;
pub mod listings;
pub mod show_service;
pub mod timing;
pub mod venue_service;

pub use context::ServiceContext;
