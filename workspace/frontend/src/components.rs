pub mod appliance_list;
pub mod charts;
pub mod prediction_panel;
