pub mod ride;
pub mod summary;

pub use ride::Ride;
pub use summary::Summary;
