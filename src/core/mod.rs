pub mod add;
pub mod clock;
pub mod editor;
pub mod import;
pub mod period;
pub mod repository;
pub mod stats;
pub mod view;

pub use clock::{Clock, FixedClock, LocalClock};
pub use period::Period;
pub use repository::RideRepository;
