pub mod comparator;
pub mod reducer;
pub mod window;
