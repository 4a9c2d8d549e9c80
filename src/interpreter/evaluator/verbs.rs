use crate::interpreter::{
    array::core::Array,
    evaluator::{
        core::EvalResult,
        dyadic::{matmul, scalar, structural},
        monadic,
    },
    lexer::Location,
};

/// A monadic kernel: one right argument in, fresh array out.
pub type MonadicKernel = fn(&Array, Location) -> EvalResult<Array>;
/// A dyadic kernel: left and right argument in, fresh array out.
pub type DyadicKernel = fn(&Array, &Array, Location) -> EvalResult<Array>;

/// The two kernels of a primitive verb. Either side may be absent: `#`
/// has no dyadic definition here, `=` no monadic one.
pub struct VerbDef {
    /// Kernel for one-argument application.
    pub monad: Option<MonadicKernel>,
    /// Kernel for two-argument application.
    pub dyad:  Option<DyadicKernel>,
}

/// Looks up a verb glyph in the primitive table.
///
/// The table is the single source of truth for which glyphs are verbs
/// with which valences; adverbs and conjunctions build derived verbs on
/// top of it. Returns `None` for glyphs the lexer knows but the evaluator
/// does not define (`%.`, `!`), which callers report as `UnknownVerb`.
///
/// # Example
/// ```
/// use jot::interpreter::evaluator::verbs::lookup;
///
/// assert!(lookup("+").is_some_and(|def| def.dyad.is_some()));
/// assert!(lookup("#").is_some_and(|def| def.dyad.is_none()));
/// assert!(lookup("%.").is_none());
/// ```
#[must_use]
pub fn lookup(glyph: &str) -> Option<VerbDef> {
    let def = match glyph {
        "+" => VerbDef { monad: Some(monadic::conjugate),
                         dyad:  Some(scalar::add), },
        "-" => VerbDef { monad: Some(monadic::negate),
                         dyad:  Some(scalar::subtract), },
        "*" => VerbDef { monad: Some(monadic::signum),
                         dyad:  Some(scalar::multiply), },
        "%" => VerbDef { monad: Some(monadic::reciprocal),
                         dyad:  Some(scalar::divide), },
        "^" => VerbDef { monad: Some(monadic::exponential),
                         dyad:  Some(scalar::power), },
        "^." => VerbDef { monad: Some(monadic::natural_log),
                          dyad:  Some(scalar::log_base), },
        "$" => VerbDef { monad: Some(monadic::shape_of),
                         dyad:  Some(structural::reshape), },
        "#" => VerbDef { monad: Some(monadic::tally),
                         dyad:  None, },
        "," => VerbDef { monad: Some(monadic::ravel),
                         dyad:  Some(structural::append), },
        "=" => VerbDef { monad: None,
                         dyad:  Some(scalar::equal), },
        "<" => VerbDef { monad: None,
                         dyad:  Some(scalar::less_than), },
        ">" => VerbDef { monad: None,
                         dyad:  Some(scalar::greater_than), },
        "<:" => VerbDef { monad: Some(monadic::decrement),
                          dyad:  Some(scalar::less_equal), },
        ">:" => VerbDef { monad: Some(monadic::increment),
                          dyad:  Some(scalar::greater_equal), },
        "<." => VerbDef { monad: Some(monadic::floor),
                          dyad:  Some(scalar::minimum), },
        ">." => VerbDef { monad: Some(monadic::ceiling),
                          dyad:  Some(scalar::maximum), },
        "*:" => VerbDef { monad: Some(monadic::square),
                          dyad:  None, },
        "-." => VerbDef { monad: Some(monadic::not),
                          dyad:  None, },
        "-:" => VerbDef { monad: Some(monadic::halve),
                          dyad:  Some(structural::match_arrays), },
        "|" => VerbDef { monad: Some(monadic::magnitude),
                         dyad:  Some(scalar::residue), },
        "|." => VerbDef { monad: Some(monadic::reverse),
                          dyad:  None, },
        "i." => VerbDef { monad: Some(monadic::integers),
                          dyad:  Some(structural::index_of), },
        "+." => VerbDef { monad: None,
                          dyad:  Some(scalar::gcd_or), },
        "*." => VerbDef { monad: None,
                          dyad:  Some(scalar::lcm_and), },
        "+.*" => VerbDef { monad: None,
                           dyad:  Some(matmul::matrix_product), },
        _ => return None,
    };
    Some(def)
}
