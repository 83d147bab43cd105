use crate::{BlockContext, ExecutionResult, Msg};

/// Post-transaction callback (hook abstraction).
///
/// A hook observes a message that has already been applied, together with the
/// events it emitted, and updates auxiliary bookkeeping.
///
/// ## Contract
///
/// - **Infallible**: there is no return value. Anything a hook cannot account
///   for is dropped (and at most logged); it must never abort the transaction.
/// - **Deterministic**: no IO, no clocks, no randomness. Every replica runs the
///   same hook on the same inputs and must reach the same state.
/// - **Not idempotent**: applying the same transaction twice applies its deltas
///   twice. The runner is responsible for calling each hook exactly once.
pub trait Hook: Send + Sync {
    /// Short identifier used in logs (e.g. `"bank"`).
    fn name(&self) -> &str;

    fn on_tx(&self, ctx: &BlockContext, msg: &Msg, result: &ExecutionResult);
}

impl<H: Hook + ?Sized> Hook for Box<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_tx(&self, ctx: &BlockContext, msg: &Msg, result: &ExecutionResult) {
        (**self).on_tx(ctx, msg, result)
    }
}

/// Adapts a plain closure to [`Hook`].
pub struct HookFn<F> {
    name: String,
    f: F,
}

impl<F> HookFn<F>
where
    F: Fn(&BlockContext, &Msg, &ExecutionResult) + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Hook for HookFn<F>
where
    F: Fn(&BlockContext, &Msg, &ExecutionResult) + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn on_tx(&self, ctx: &BlockContext, msg: &Msg, result: &ExecutionResult) {
        (self.f)(ctx, msg, result)
    }
}

impl<F> core::fmt::Debug for HookFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HookFn").field("name", &self.name).finish()
    }
}
