pub mod use_spot_report;
pub mod use_spots;
