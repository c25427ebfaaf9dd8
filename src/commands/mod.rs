//! The command chain: operation interface, decorators, and terminals.
//!
//! Callers issue operations against a [`VersionControlCommands`]
//! implementation; the call flows through the decorator chain, each link
//! transforming the asset-path set as needed, down to a terminal that talks
//! to the backend and updates the shared status database.

pub mod backend;
pub mod companion;
pub mod decorator;
pub mod filtered;
pub mod interface;
pub mod loopback;

// === Operation interface ===
// The command surface consumed by GUI and automation callers, plus the
// backend capability the terminal implementation depends on
pub use interface::{
    ConflictResolution, OperationMode, OperationRequest, RawStatusProvider, StatusLevel,
    VersionControlCommands,
};

// === Decorators ===
// Chain links: the neutral forwarder, companion-file mirroring, and the
// status-predicate bulk pipeline
pub use companion::CompanionFileDecorator;
pub use decorator::Decorator;
pub use filtered::FilteredAssetsPipeline;

// === Terminals ===
// The backend-facing implementation and the recording loopback double
pub use backend::BackendCommands;
pub use loopback::{DataCarrier, LoopbackCommands};

use crate::core::database::SharedDatabase;
use crate::core::error::Result;
use crate::core::settings::CompanionSettings;

/// The default chain type: bulk filtering over companion mirroring over the
/// backend terminal.
pub type DefaultChain<P> = FilteredAssetsPipeline<CompanionFileDecorator<BackendCommands<P>>>;

/// Compose the default chain at startup.
///
/// Fails only on unusable companion settings; backend availability is not
/// checked here, failures surface later as boolean operation results.
pub fn build_chain<P: RawStatusProvider + 'static>(
    provider: P,
    settings: CompanionSettings,
    database: SharedDatabase,
) -> Result<DefaultChain<P>> {
    let terminal = BackendCommands::new(provider, database);
    let companion = CompanionFileDecorator::new(terminal, settings)?;
    Ok(FilteredAssetsPipeline::new(companion))
}
