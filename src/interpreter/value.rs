/// Physical dimensions.
///
/// Defines the seven-exponent SI `Dimension` carried by every scalar, its
/// algebra under multiplication, division and integer powers, and its LaTeX
/// unit rendering.
pub mod dimension;
/// Matrix values.
///
/// Defines the non-empty rectangular `Matrix` grid with row-major storage,
/// transposition, cell-wise mapping and `pmatrix` rendering.
pub mod matrix;
/// Function values.
///
/// A `Closure` owns a private copy of its body and a snapshot of the names
/// visible where it was defined.
pub mod closure;
/// The runtime value type.
///
/// Defines `Value`, the sum of scalars, matrices and functions, with typed
/// accessors, truthiness and LaTeX rendering.
pub mod core;
