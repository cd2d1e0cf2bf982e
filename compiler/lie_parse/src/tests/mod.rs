//! Parser tests.
//!
//! - `parser`: literals, operators, trailers, spans and error reporting
//! - `compositional`: generated expressions checked against their expected
//!   tree shape, and deeply nested input

mod compositional;
