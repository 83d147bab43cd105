//! Hook boundary: internal failures end the invocation and are only logged.

use nametrack_core::{ErrorKind, NameHash, TrackingResult};
use nametrack_events::{BlockContext, Msg};
use nametrack_registry::{Registry, RegistryStore};

/// Drop a failed tracking step, logging it by kind.
///
/// Not-found is the common case (most addresses carry no name), so it stays at
/// `trace`; malformed event text is rarer and goes to `debug`.
pub(crate) fn absorb(hook: &str, ctx: &BlockContext, msg: &Msg, outcome: TrackingResult<()>) {
    let Err(err) = outcome else {
        return;
    };

    match err.kind() {
        ErrorKind::NotFound => tracing::trace!(
            hook,
            height = ctx.height(),
            chain_id = ctx.chain_id(),
            msg_type = msg.msg_type(),
            reason = %err,
            "nothing to track"
        ),
        ErrorKind::Parse => tracing::debug!(
            hook,
            height = ctx.height(),
            chain_id = ctx.chain_id(),
            msg_type = msg.msg_type(),
            error = %err,
            "malformed event data; tracking stopped"
        ),
    }
}

/// Single write-back of a registry, logged with the block it belongs to.
pub(crate) fn write_back<S: RegistryStore + ?Sized>(
    store: &S,
    hook: &str,
    ctx: &BlockContext,
    name_hash: NameHash,
    registry: Registry,
) {
    tracing::debug!(
        hook,
        height = ctx.height(),
        chain_id = ctx.chain_id(),
        name = %registry.name,
        locked_value = %registry.locked_value,
        "registry updated"
    );
    store.set_registry(name_hash, registry);
}
