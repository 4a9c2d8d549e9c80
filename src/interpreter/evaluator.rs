/// The evaluation context and tree-walking dispatcher.
///
/// Owns the name environment and routes each AST node to the machinery
/// that handles it: literal materialization, name lookup, verb
/// application, and assignment.
pub mod core;
/// The primitive verb registry.
///
/// Maps each verb glyph to its monadic and dyadic kernels. Derived verbs
/// (adverb and conjunction applications, trains) are resolved by the
/// modules below, all of which bottom out in this table.
pub mod verbs;
/// Monadic verb kernels: negate, square, reciprocal, iota, shape, tally
/// and the rest of the single-argument primitives.
pub mod monadic;
/// Dyadic verb kernels, split into scalar arithmetic, structural verbs
/// and the matrix product, all routed through one shape-agreement helper.
pub mod dyadic;
/// Adverbs: insert (reduce), prefix scan, and reflex.
pub mod adverb;
/// Conjunctions: the dot inner product and the power of a verb.
pub mod conjunction;
/// Trains: hook and fork application.
pub mod train;
