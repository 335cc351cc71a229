//! Block-editor plugin contract.
//!
//! A block editor hosts one plugin instance per content block. The host
//! asks the plugin to render its element, later calls `save` to persist the
//! block, and runs `validate` on the saved data before accepting it.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Entry shown in the host editor's block insertion menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toolbox {
    pub title: &'static str,
    pub icon: &'static str,
}

/// A block type the host editor can instantiate.
///
/// The element and error types are left to the platform layer, so the
/// contract can be implemented against the browser DOM or a test double.
pub trait BlockTool {
    /// Persisted block data, exchanged with the host as JSON.
    type Data: Serialize + DeserializeOwned;
    /// Element handed to the host for mounting.
    type Element;
    type Error;

    /// Insertion menu metadata.
    const TOOLBOX: Toolbox;

    /// Whether the block can be displayed in a read-only editor.
    const READ_ONLY_SUPPORTED: bool = false;

    /// Build the block's element and attach its event handlers.
    fn render(&mut self) -> Result<Self::Element, Self::Error>;

    /// Current block data for the host's save cycle.
    fn save(&self) -> Self::Data;

    /// Whether saved data is acceptable to the host.
    fn validate(&self, saved: &Self::Data) -> bool;
}
