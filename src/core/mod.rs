pub mod demand_series;
pub mod end_use;
pub mod occupancy;
pub mod reference_data;
pub mod units;
pub mod water_heat_demand;
