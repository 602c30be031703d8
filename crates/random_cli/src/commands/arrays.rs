//! Array utility commands: permutation, shuffle
//!
//! These go through a module instance so they draw from its default source,
//! exactly as a script calling the free functions would.

use random_core::ModuleInstance;
use tracing::info;

use crate::Result;

/// Run the permutation command
pub fn permutation(instance: &mut ModuleInstance, n: usize) -> Result<String> {
    info!(seed = instance.default_seed(), n, "generating permutation");
    Ok(serde_json::to_string(&instance.permutation(n))?)
}

/// Run the shuffle command
pub fn shuffle(instance: &mut ModuleInstance, items: &[String]) -> Result<String> {
    info!(
        seed = instance.default_seed(),
        len = items.len(),
        "shuffling items"
    );
    Ok(serde_json::to_string(&instance.shuffled(items))?)
}
