//! Spreading a tuple's elements into a closure's positional arguments.
//!
//! Powers [`then_unpack`](crate::Outcome::then_unpack) and the wrapped form of
//! [`catch_wrap`](crate::catch::catch_wrap): an outcome carrying `(a, b)` can
//! feed a plain two-argument closure without manual destructuring.

/// A callable that accepts its arguments as one tuple.
///
/// Implemented for every `FnOnce` of arity 1 through 8, keyed by the matching
/// tuple type. `Output` is the callable's own return type.
///
/// # Examples
///
/// ```
/// use outcome_rail::TupleApply;
///
/// let add = |a: i32, b: i32| a + b;
/// assert_eq!(add.apply((2, 3)), 5);
/// ```
pub trait TupleApply<Args> {
    /// The callable's return type.
    type Output;

    /// Invokes `self`, spreading `args` positionally.
    fn apply(self, args: Args) -> Self::Output;
}

macro_rules! impl_tuple_apply {
    ($(($($arg:ident: $ty:ident),+))+) => {
        $(
            impl<Func, Ret, $($ty),+> TupleApply<($($ty,)+)> for Func
            where
                Func: FnOnce($($ty),+) -> Ret,
            {
                type Output = Ret;

                #[inline]
                fn apply(self, ($($arg,)+): ($($ty,)+)) -> Ret {
                    self($($arg),+)
                }
            }
        )+
    };
}

impl_tuple_apply! {
    (a: A)
    (a: A, b: B)
    (a: A, b: B, c: C)
    (a: A, b: B, c: C, d: D)
    (a: A, b: B, c: C, d: D, e: E)
    (a: A, b: B, c: C, d: D, e: E, f: F)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G)
    (a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H)
}
