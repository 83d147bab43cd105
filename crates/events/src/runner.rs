//! Hook runner: invokes registered hooks for every delivered transaction.
//!
//! Hooks run strictly in registration order, and transactions strictly in
//! block order. The runner refuses to go back in height, since hooks are not
//! idempotent and a replayed block would double-count its deltas.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BlockContext, ExecutionResult, Hook, Msg};

/// A message paired with the result of applying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveredTx {
    pub msg: Msg,
    pub result: ExecutionResult,
}

impl DeliveredTx {
    pub fn new(msg: impl Into<Msg>, result: ExecutionResult) -> Self {
        Self {
            msg: msg.into(),
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunnerError {
    #[error("block height went backwards (last={last}, found={found})")]
    NonMonotonicHeight { last: u64, found: u64 },
}

/// Ordered set of hooks plus the last height they were run at.
#[derive(Default)]
pub struct HookRunner {
    hooks: Vec<Box<dyn Hook>>,
    last_height: Option<u64>,
}

impl HookRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: impl Hook + 'static) -> &mut Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn with_hook(mut self, hook: impl Hook + 'static) -> Self {
        self.register(hook);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Height of the most recent transaction handed to the hooks.
    pub fn last_height(&self) -> Option<u64> {
        self.last_height
    }

    /// Run every hook for one transaction of the current (or a later) block.
    pub fn run_tx(
        &mut self,
        ctx: &BlockContext,
        msg: &Msg,
        result: &ExecutionResult,
    ) -> Result<(), RunnerError> {
        if let Some(last) = self.last_height {
            if ctx.height() < last {
                return Err(RunnerError::NonMonotonicHeight {
                    last,
                    found: ctx.height(),
                });
            }
        }
        self.last_height = Some(ctx.height());

        for hook in &self.hooks {
            tracing::trace!(
                hook = hook.name(),
                msg_type = msg.msg_type(),
                height = ctx.height(),
                "running hook"
            );
            hook.on_tx(ctx, msg, result);
        }
        Ok(())
    }

    /// Run every hook for each transaction of a new block, in order.
    pub fn run_block<'a>(
        &mut self,
        ctx: &BlockContext,
        txs: impl IntoIterator<Item = &'a DeliveredTx>,
    ) -> Result<(), RunnerError> {
        if let Some(last) = self.last_height {
            if ctx.height() <= last {
                return Err(RunnerError::NonMonotonicHeight {
                    last,
                    found: ctx.height(),
                });
            }
        }

        let mut delivered = 0usize;
        for tx in txs {
            self.run_tx(ctx, &tx.msg, &tx.result)?;
            delivered += 1;
        }
        self.last_height = Some(ctx.height());

        tracing::debug!(
            height = ctx.height(),
            chain_id = ctx.chain_id(),
            txs = delivered,
            "hooks applied to block"
        );
        Ok(())
    }
}

impl core::fmt::Debug for HookRunner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HookRunner")
            .field("hooks", &self.hook_names())
            .field("last_height", &self.last_height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::HookFn;

    fn ctx(height: u64) -> BlockContext {
        BlockContext::new(height, Utc.timestamp_opt(1_600_000_000, 0).unwrap(), "columbus-4")
    }

    fn recorder(name: &'static str, log: Arc<Mutex<Vec<String>>>) -> HookFn<impl Fn(&BlockContext, &Msg, &ExecutionResult) + Send + Sync> {
        HookFn::new(name, move |ctx: &BlockContext, msg: &Msg, _: &ExecutionResult| {
            log.lock()
                .unwrap()
                .push(format!("{name}@{}:{}", ctx.height(), msg.msg_type()));
        })
    }

    #[test]
    fn hooks_run_in_registration_and_tx_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut runner = HookRunner::new()
            .with_hook(recorder("a", log.clone()))
            .with_hook(recorder("b", log.clone()));
        assert_eq!(runner.hook_names(), vec!["a", "b"]);

        let txs = vec![
            DeliveredTx {
                msg: Msg::Other("x/one".into()),
                result: ExecutionResult::default(),
            },
            DeliveredTx {
                msg: Msg::Other("x/two".into()),
                result: ExecutionResult::default(),
            },
        ];
        runner.run_block(&ctx(5), &txs).unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["a@5:x/one", "b@5:x/one", "a@5:x/two", "b@5:x/two"]
        );
        assert_eq!(runner.last_height(), Some(5));
    }

    #[test]
    fn replayed_block_is_rejected() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut runner = HookRunner::new().with_hook(recorder("a", log.clone()));

        runner.run_block(&ctx(7), &[]).unwrap();
        let err = runner.run_block(&ctx(7), &[]).unwrap_err();
        assert_eq!(err, RunnerError::NonMonotonicHeight { last: 7, found: 7 });

        let err = runner
            .run_tx(&ctx(6), &Msg::Other("x/late".into()), &ExecutionResult::default())
            .unwrap_err();
        assert_eq!(err, RunnerError::NonMonotonicHeight { last: 7, found: 6 });
        assert!(log.lock().unwrap().is_empty());
    }
}
