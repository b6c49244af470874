pub mod ad_form;
pub mod video;
