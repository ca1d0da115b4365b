pub mod cell;
pub mod observation_frame;
pub mod query_date;
pub mod series;
