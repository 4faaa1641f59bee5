//! Model catalog: retrieval, normalization and the catalog view state.
//!
//! When the models page becomes current the view is mounted in `Loading`
//! and a single fetch is spawned on the I/O task pool. The fetch result
//! moves the view to `Loaded` or `Error`, both terminal for that mount.
//! Navigating away unmounts the view and drops the fetch; a late result
//! is discarded by its mount ticket.
//!
//! ## Module Structure
//!
//! - [`record`] - `ModelRecord` and response envelope normalization
//! - [`client`] - `CatalogSource` trait and the HTTP client
//! - [`state`] - `CatalogView`, `CatalogLoadState`, display policy
//! - [`systems`] - mount/unmount and task polling systems

mod client;
mod record;
mod state;
mod systems;


use bevy::prelude::*;

use crate::config::ConfigLoaded;

pub use record::{CardKey, ModelRecord};
pub use state::{CatalogDisplay, CatalogLoadState, CatalogView};

/// Plugin for the catalog view
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatalogView>()
            .add_systems(
                Startup,
                systems::install_catalog_source.after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (systems::sync_catalog_mount, systems::poll_catalog_fetch).chain(),
            );
    }
}
