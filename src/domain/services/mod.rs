pub mod feeding;
pub mod health_chat;
pub mod parse;
pub mod reminders;
pub mod schedule;
pub mod units;

pub use feeding::food_recommendation;
pub use schedule::feeding_schedule;
pub use units::convert_amount;
