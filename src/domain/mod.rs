pub mod entities;
pub mod pipeline;
pub mod values;
