pub mod bounded_deque;

pub use bounded_deque::BoundedDeque;
