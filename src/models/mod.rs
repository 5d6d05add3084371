pub mod api_error;
pub mod place;
pub mod restaurant;
