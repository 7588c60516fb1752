pub mod app_time;
pub mod export;
pub mod maths_utils;
