pub mod comparison_table;
pub mod cost_breakdown;
pub mod kpi_card;
pub mod step_indicator;
pub mod toast;
