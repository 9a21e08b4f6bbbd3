pub mod colour;
pub mod complex;
pub mod grid_size;
pub mod iteration_budget;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
