//! CLI command implementations.

pub(crate) mod outline;
pub(crate) mod scaffold;

pub(crate) use outline::OutlineArgs;
pub(crate) use scaffold::ScaffoldArgs;
