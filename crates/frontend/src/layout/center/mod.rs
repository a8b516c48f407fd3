pub mod center;
pub mod registry;

pub use center::Center;
