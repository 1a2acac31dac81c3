pub mod bag_meter;
pub mod breakdown_row;
pub mod checkbox_field;
pub mod kpi_card;
pub mod toast;
