//! Bevy systems that mount, fetch and resolve the catalog view.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use super::client::{CatalogSourceHandle, HttpCatalogClient};
use super::state::{CatalogFetchTask, CatalogView};
use crate::config::ClientConfig;
use crate::navigation::{CurrentRoute, Page};

/// Startup system to build the HTTP catalog client from config.
///
/// Leaves an already inserted source alone.
pub fn install_catalog_source(
    mut commands: Commands,
    config: Res<ClientConfig>,
    existing: Option<Res<CatalogSourceHandle>>,
) {
    if existing.is_some() {
        return;
    }

    let client = HttpCatalogClient::from_config(&config.data);
    info!("Catalog endpoint: {}", client.url());
    commands.insert_resource(CatalogSourceHandle::new(client));
}

/// System to mount the catalog view when the models page becomes current
/// and unmount it when the user navigates away.
///
/// Mounting issues exactly one fetch. Unmounting drops every outstanding
/// fetch task, which cancels it.
pub fn sync_catalog_mount(
    mut commands: Commands,
    route: Res<CurrentRoute>,
    source: Res<CatalogSourceHandle>,
    mut view: ResMut<CatalogView>,
    tasks: Query<Entity, With<CatalogFetchTask>>,
) {
    let wants_view = route.page() == Page::Models;
    if wants_view == view.is_mounted() {
        return;
    }

    // Any task still alive here belongs to an older mount
    for entity in tasks.iter() {
        commands.entity(entity).despawn();
    }

    if wants_view {
        let ticket = view.mount();
        let source = source.0.clone();

        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move { source.fetch_catalog() });

        commands.spawn(CatalogFetchTask { ticket, task });
        info!("Catalog view mounted, loading models");
    } else {
        view.unmount();
        info!("Catalog view unmounted");
    }
}

/// System to poll the catalog fetch task
pub fn poll_catalog_fetch(
    mut commands: Commands,
    mut view: ResMut<CatalogView>,
    mut tasks: Query<(Entity, &mut CatalogFetchTask)>,
) {
    for (entity, mut fetch) in tasks.iter_mut() {
        if let Some(outcome) = future::block_on(future::poll_once(&mut fetch.task)) {
            if !view.resolve(fetch.ticket, outcome) {
                debug!("Discarding catalog result for a view that is no longer mounted");
            }

            commands.entity(entity).despawn();
        }
    }
}
