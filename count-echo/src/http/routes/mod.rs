mod count;
pub use count::count_handler;
