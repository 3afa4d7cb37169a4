/// This module provides a plain line writer: each item is written as-is, in order.
pub mod line;
