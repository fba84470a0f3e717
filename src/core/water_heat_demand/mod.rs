pub mod annual_demand;
pub mod climate_zone;
pub mod expander;
pub mod heater;
pub mod hot_water;
pub mod hourly_share;
pub mod monthly_share;
pub mod purchased_energy;
pub mod type_code;
