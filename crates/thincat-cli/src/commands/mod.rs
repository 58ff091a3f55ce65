pub mod arrow;
pub mod closure;
pub mod functors;
pub mod transform;
