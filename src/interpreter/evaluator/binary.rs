/// Dispatch from operator tags to the typed handlers.
pub mod core;

/// Addition, subtraction, scaling and division, with dimension checks.
pub mod arithmetic;

/// Matrix products and the vector dot-product fallbacks.
pub mod matmul;

/// Powers of scalars.
pub mod power;

/// Equality, ordering and placeholder capture.
pub mod comparison;

/// `\land` and `\lor`.
pub mod logic;
