mod pizza;

pub use pizza::Pizza;
