pub mod geo_math;
pub mod handler_404;
