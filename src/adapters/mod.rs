pub mod csv_data_adapter;
pub mod file_config_adapter;
pub mod system_clock;

#[cfg(feature = "sim")]
pub mod sim_data_adapter;
