pub mod conditions;
pub mod error;
pub mod forecast;
pub mod report;
pub mod spot;
