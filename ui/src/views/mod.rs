mod landing;
pub use landing::LandingApp;
