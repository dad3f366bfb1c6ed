/// Core module: DI/wiring; pure wiring must be sync and must not block.
///
/// `init` runs once per lifecycle pass for every module the host decides to
/// bring up. Implementations read their configuration from the context and
/// publish their client interfaces into the hub; they must not reach into
/// other modules' internals.
pub trait Module: Send + Sync + 'static {
    fn init(&self, ctx: &crate::context::ModuleCtx) -> anyhow::Result<()>;
}
