//! Deferred evaluation without memoization.
//!
//! This module provides the `Deferred<T, F>` type, a container that holds
//! either an already-computed value or a zero-argument computation that is
//! run on demand.
//!
//! Unlike a caching lazy cell, a `Deferred` never stores the result of its
//! computation: every retrieval re-invokes the closure. Side effects repeat,
//! and impure closures may return different values on different calls.
//!
//! # Examples
//!
//! ```rust
//! use deferral::Deferred;
//!
//! let deferred = Deferred::new_lazy(|| {
//!     println!("Computing...");
//!     42
//! });
//!
//! // No output yet - computation is deferred
//! println!("Created deferred value");
//!
//! // Now "Computing..." is printed
//! assert_eq!(deferred.get(), 42);
//!
//! // "Computing..." is printed again - retrieval is never cached
//! assert_eq!(deferred.get(), 42);
//! ```

use std::fmt;

/// A container holding either a ready value or an unevaluated computation.
///
/// `Deferred<T, F>` defers computation until the value is retrieved via
/// [`get`](Self::get). Which variant a container holds is fixed at
/// construction and never changes; the container is immutable after
/// creation.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
/// * `F` - The type of the computation (defaults to `fn() -> T`)
///
/// # No Memoization
///
/// Retrieval is **not** memoized: every [`get`](Self::get) against a
/// [`Computation`](Self::Computation) re-invokes the closure. Callers may
/// rely on this - repeated side effects are observable behavior, and adding
/// a cache would change it.
///
/// # Thread Safety
///
/// This type holds no interior mutability and makes no thread-safety
/// guarantee of its own. It is `Send`/`Sync` exactly when its payloads are;
/// if a computation touches shared mutable state, synchronizing that state
/// is the caller's responsibility. For a memoizing, synchronized cell use
/// `std::sync::LazyLock` instead.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use deferral::Deferred;
///
/// let eager = Deferred::new(42);
/// let lazy = Deferred::new_lazy(|| 21 * 2);
///
/// assert_eq!(eager.get(), 42);
/// assert_eq!(lazy.get(), 42);
/// ```
///
/// ## Repeated Evaluation
///
/// ```rust
/// use deferral::Deferred;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let deferred = Deferred::new_lazy(|| {
///     call_count.set(call_count.get() + 1);
///     call_count.get()
/// });
///
/// assert_eq!(call_count.get(), 0); // Not called yet
/// assert_eq!(deferred.get(), 1);   // Called once
/// assert_eq!(deferred.get(), 2);   // Called again - no caching
/// ```
#[derive(Clone)]
pub enum Deferred<T, F = fn() -> T> {
    /// A concrete, already-known value requiring no computation.
    Immediate(T),
    /// An unevaluated zero-argument computation, run on every retrieval.
    Computation(F),
}

impl<T> Deferred<T> {
    /// Creates a deferred value that already holds a concrete value.
    ///
    /// No computation is associated with the container; retrieval returns
    /// the held value every time.
    ///
    /// # Arguments
    ///
    /// * `value` - The already-computed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let deferred = Deferred::new(42);
    /// assert!(deferred.is_immediate());
    /// assert_eq!(deferred.get(), 42);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::Immediate(value)
    }

    /// Lifts a value into the deferred context (Applicative pure).
    ///
    /// This is equivalent to [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let deferred = Deferred::pure(42);
    /// assert_eq!(deferred.get(), 42);
    /// ```
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, F: Fn() -> T> Deferred<T, F> {
    /// Creates a deferred value from a zero-argument computation.
    ///
    /// The computation is not invoked here; it runs on every subsequent
    /// [`get`](Self::get). It may capture external state by reference or by
    /// move; the container takes ownership of the closure. The `Fn` bound
    /// reflects the retrieval contract - the closure must remain invocable
    /// any number of times.
    ///
    /// # Arguments
    ///
    /// * `thunk` - A function producing the value when called
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    /// use std::cell::Cell;
    ///
    /// let invoked = Cell::new(false);
    /// let deferred = Deferred::new_lazy(|| {
    ///     invoked.set(true);
    ///     42
    /// });
    ///
    /// assert!(!invoked.get()); // Nothing has run
    /// assert_eq!(deferred.get(), 42);
    /// assert!(invoked.get());
    /// ```
    #[inline]
    pub const fn new_lazy(thunk: F) -> Self {
        Self::Computation(thunk)
    }
}

impl<T: Clone, F: Fn() -> T> Deferred<T, F> {
    /// Retrieves the value, running the computation if there is one.
    ///
    /// For an [`Immediate`](Self::Immediate) container this returns a clone
    /// of the held value and is idempotent. For a
    /// [`Computation`](Self::Computation) container the closure is invoked
    /// synchronously on the calling thread, every call - results are never
    /// cached, so an impure closure's side effects repeat and its output
    /// may vary between calls.
    ///
    /// # Panics
    ///
    /// Never panics of its own accord. A panic raised by the wrapped
    /// computation propagates to the caller unchanged, and the container
    /// remains usable afterwards - there is no poisoning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let immediate = Deferred::new("ready");
    /// assert_eq!(immediate.get(), "ready");
    /// assert_eq!(immediate.get(), "ready"); // Idempotent
    ///
    /// let computed = Deferred::new_lazy(|| "ready".len());
    /// assert_eq!(computed.get(), 5);
    /// ```
    pub fn get(&self) -> T {
        match self {
            Self::Immediate(value) => value.clone(),
            Self::Computation(thunk) => thunk(),
        }
    }

    // =========================================================================
    // Combinators (map, flat_map, zip, zip_with)
    // =========================================================================

    /// Applies a function to the deferred value, producing a new deferred
    /// value.
    ///
    /// The result is always a [`Computation`](Self::Computation): neither
    /// the source's retrieval nor `function` runs here. Every
    /// [`get`](Self::get) on the result retrieves the source afresh and
    /// re-applies `function` - even when the source is
    /// [`Immediate`](Self::Immediate), the transformation itself is not
    /// assumed to be cheap or pure, so it reruns each time.
    ///
    /// # Arguments
    ///
    /// * `function` - A function to apply to the retrieved value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let doubled = Deferred::new(21).map(|x| x * 2);
    /// assert_eq!(doubled.get(), 42);
    /// ```
    ///
    /// The value type may change:
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let stringified = Deferred::new_lazy(|| 42).map(|x| x.to_string());
    /// assert_eq!(stringified.get(), "42");
    /// ```
    pub fn map<U, G>(self, function: G) -> Deferred<U, impl Fn() -> U>
    where
        G: Fn(T) -> U,
    {
        Deferred::new_lazy(move || function(self.get()))
    }

    /// Applies a function that returns a deferred value, then flattens the
    /// result.
    ///
    /// This is the monadic bind operation. When the result is retrieved it
    /// (a) retrieves the source, (b) applies `function` to obtain an
    /// intermediate deferred value, and (c) retrieves that intermediate
    /// through the ordinary retrieval contract - the intermediate may be
    /// either variant. None of the three steps runs before the result's
    /// [`get`](Self::get), and every `get` re-runs the entire sequence.
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the retrieved value to a new deferred
    ///   value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let result = Deferred::new(21).flat_map(|x| Deferred::new_lazy(move || x * 2));
    /// assert_eq!(result.get(), 42);
    /// ```
    pub fn flat_map<U, FunctionResult, G>(self, function: G) -> Deferred<U, impl Fn() -> U>
    where
        U: Clone,
        FunctionResult: Fn() -> U,
        G: Fn(T) -> Deferred<U, FunctionResult>,
    {
        Deferred::new_lazy(move || function(self.get()).get())
    }

    /// Combines two deferred values into a deferred tuple.
    ///
    /// Both sources are retrieved afresh on every retrieval of the result.
    ///
    /// # Arguments
    ///
    /// * `other` - Another deferred value to combine with
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let combined = Deferred::new(1).zip(Deferred::new_lazy(|| "hello"));
    /// assert_eq!(combined.get(), (1, "hello"));
    /// ```
    pub fn zip<U, OtherFunction>(
        self,
        other: Deferred<U, OtherFunction>,
    ) -> Deferred<(T, U), impl Fn() -> (T, U)>
    where
        U: Clone,
        OtherFunction: Fn() -> U,
    {
        Deferred::new_lazy(move || (self.get(), other.get()))
    }

    /// Combines two deferred values using a function.
    ///
    /// # Arguments
    ///
    /// * `other` - Another deferred value to combine with
    /// * `function` - A function that combines the two retrieved values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let lazy1 = Deferred::new_lazy(|| 20);
    /// let lazy2 = Deferred::new_lazy(|| 22);
    /// let sum = lazy1.zip_with(lazy2, |a, b| a + b);
    ///
    /// assert_eq!(sum.get(), 42);
    /// ```
    pub fn zip_with<U, V, OtherFunction, CombineFunction>(
        self,
        other: Deferred<U, OtherFunction>,
        function: CombineFunction,
    ) -> Deferred<V, impl Fn() -> V>
    where
        U: Clone,
        OtherFunction: Fn() -> U,
        CombineFunction: Fn(T, U) -> V,
    {
        Deferred::new_lazy(move || function(self.get(), other.get()))
    }
}

impl<T, F> Deferred<T, F> {
    /// Returns a reference to the value without evaluating anything, if the
    /// container holds one.
    ///
    /// Returns `Some` only for an [`Immediate`](Self::Immediate) container.
    /// A [`Computation`](Self::Computation) has no value until retrieved,
    /// and `peek` never triggers evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let eager = Deferred::new(42);
    /// assert_eq!(eager.peek(), Some(&42));
    ///
    /// let lazy: Deferred<i32, _> = Deferred::new_lazy(|| 42);
    /// assert_eq!(lazy.peek(), None);
    /// ```
    pub const fn peek(&self) -> Option<&T> {
        match self {
            Self::Immediate(value) => Some(value),
            Self::Computation(_) => None,
        }
    }

    /// Returns `true` if the container holds a concrete value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// assert!(Deferred::new(42).is_immediate());
    /// ```
    #[inline]
    pub const fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate(_))
    }

    /// Returns `true` if the container holds an unevaluated computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let deferred: Deferred<i32, _> = Deferred::new_lazy(|| 42);
    /// assert!(deferred.is_deferred());
    /// ```
    #[inline]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Computation(_))
    }
}

impl<T, F: FnOnce() -> T> Deferred<T, F> {
    /// Consumes the container and returns the value, running the
    /// computation if there is one.
    ///
    /// Because the container is consumed, this needs neither `Clone` on `T`
    /// nor a re-invocable closure - a `FnOnce` computation suffices.
    ///
    /// # Panics
    ///
    /// A panic raised by the wrapped computation propagates unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let deferred = Deferred::new_lazy(|| String::from("built on demand"));
    /// assert_eq!(deferred.into_inner(), "built on demand");
    /// ```
    pub fn into_inner(self) -> T {
        match self {
            Self::Immediate(value) => value,
            Self::Computation(thunk) => thunk(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Default> Default for Deferred<T> {
    /// Creates a container holding the default value of `T`.
    ///
    /// A default-constructed container behaves as
    /// [`Immediate`](Self::Immediate) holding `T::default()`; retrieval
    /// returns that value and cannot fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let deferred: Deferred<i32> = Deferred::default();
    /// assert_eq!(deferred.get(), 0);
    /// ```
    fn default() -> Self {
        Self::Immediate(T::default())
    }
}

impl<T> From<T> for Deferred<T> {
    /// Lifts a value into an [`Immediate`](Self::Immediate) container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferral::Deferred;
    ///
    /// let deferred = Deferred::from("ready");
    /// assert_eq!(deferred.get(), "ready");
    /// ```
    fn from(value: T) -> Self {
        Self::Immediate(value)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Deferred<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(value) => formatter.debug_tuple("Deferred").field(value).finish(),
            Self::Computation(_) => formatter.debug_tuple("Deferred").field(&"<deferred>").finish(),
        }
    }
}

static_assertions::assert_impl_all!(Deferred<i32>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(Deferred<String>: Clone, Default, Send, Sync);
