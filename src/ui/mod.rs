pub mod components;
pub mod state;
pub mod theme;
pub mod view_model;
