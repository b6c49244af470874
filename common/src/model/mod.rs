pub mod ad;
pub mod form_config;
