//! Catalog view state: one load cycle per mount of the models page.

use bevy::prelude::*;
use bevy::tasks::Task;

use super::record::ModelRecord;
use crate::error::CatalogError;

/// Outcome of one catalog fetch
pub type FetchOutcome = Result<Vec<ModelRecord>, CatalogError>;

/// Load state of a mounted catalog view
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoadState {
    Loading,
    Error { message: String },
    /// Records in server order
    Loaded { records: Vec<ModelRecord> },
}

/// What the catalog page should show for a given state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogDisplay<'a> {
    LoadingIndicator,
    ErrorMessage(&'a str),
    NoRecords,
    Cards(&'a [ModelRecord]),
}

impl CatalogLoadState {
    pub fn display(&self) -> CatalogDisplay<'_> {
        match self {
            CatalogLoadState::Loading => CatalogDisplay::LoadingIndicator,
            CatalogLoadState::Error { message } => CatalogDisplay::ErrorMessage(message),
            CatalogLoadState::Loaded { records } if records.is_empty() => {
                CatalogDisplay::NoRecords
            }
            CatalogLoadState::Loaded { records } => CatalogDisplay::Cards(records),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogLoadState::Loading)
    }
}

/// Identity of one mount of the catalog view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountTicket(u64);

#[derive(Debug)]
struct MountedCatalog {
    ticket: MountTicket,
    state: CatalogLoadState,
}

/// Resource holding the catalog view, if it is mounted
#[derive(Resource, Default, Debug)]
pub struct CatalogView {
    mounted: Option<MountedCatalog>,
    next_ticket: u64,
}

impl CatalogView {
    /// Mount a fresh view in `Loading`, replacing any previous mount.
    ///
    /// The returned ticket must accompany the fetch issued for this mount.
    pub fn mount(&mut self) -> MountTicket {
        let ticket = MountTicket(self.next_ticket);
        self.next_ticket += 1;
        self.mounted = Some(MountedCatalog {
            ticket,
            state: CatalogLoadState::Loading,
        });
        ticket
    }

    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[cfg(test)]
    pub fn ticket(&self) -> Option<MountTicket> {
        self.mounted.as_ref().map(|m| m.ticket)
    }

    pub fn state(&self) -> Option<&CatalogLoadState> {
        self.mounted.as_ref().map(|m| &m.state)
    }

    /// Apply a fetch outcome to the mount that issued it.
    ///
    /// Returns false (and changes nothing) when that mount is gone or has
    /// already left `Loading`.
    pub fn resolve(&mut self, ticket: MountTicket, outcome: FetchOutcome) -> bool {
        let Some(mounted) = self.mounted.as_mut().filter(|m| m.ticket == ticket) else {
            return false;
        };
        if !mounted.state.is_loading() {
            return false;
        }

        mounted.state = match outcome {
            Ok(records) => CatalogLoadState::Loaded { records },
            Err(e) => {
                warn!("Error loading models: {}", e);
                CatalogLoadState::Error {
                    message: e.user_message(),
                }
            }
        };
        true
    }
}

/// Background catalog fetch, tagged with the mount that issued it
#[derive(Component)]
pub struct CatalogFetchTask {
    pub ticket: MountTicket,
    pub task: Task<FetchOutcome>,
}
