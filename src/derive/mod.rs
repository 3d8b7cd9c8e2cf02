pub mod daily;
pub mod hourly;
pub mod uv_index;
