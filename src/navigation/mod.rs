//! Routing and navbar highlighting.
//!
//! The current location is a plain path string held in [`CurrentRoute`].
//! Which navbar entry is highlighted is recomputed from it on every frame.

use bevy::prelude::*;

/// One fixed navbar destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub path: &'static str,
    pub label: &'static str,
}

/// Navbar entries, in display order
pub const NAV_ENTRIES: [NavigationEntry; 3] = [
    NavigationEntry {
        path: "/",
        label: "Home",
    },
    NavigationEntry {
        path: "/models",
        label: "Models",
    },
    NavigationEntry {
        path: "/docs",
        label: "Docs",
    },
];

/// The entry whose path equals `current_path` exactly, if any.
///
/// No prefix matching and no trailing-slash normalization: `/models/` is
/// not `/models`.
pub fn active_entry<'a>(
    entries: &'a [NavigationEntry],
    current_path: &str,
) -> Option<&'a NavigationEntry> {
    entries.iter().find(|entry| entry.path == current_path)
}

/// Page rendered for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Models,
    Docs,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Page::Home,
            "/models" => Page::Models,
            "/docs" => Page::Docs,
            _ => Page::NotFound,
        }
    }
}

/// Resource holding the current location
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    path: String,
}

impl Default for CurrentRoute {
    fn default() -> Self {
        Self::new("/")
    }
}

impl CurrentRoute {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page(&self) -> Page {
        Page::from_path(&self.path)
    }
}

/// Message to navigate to a path
#[derive(Message, Debug, Clone)]
pub struct NavigateRequest {
    pub path: String,
}

/// System to apply navigation requests; the last one in a frame wins
fn apply_navigation(
    mut events: MessageReader<NavigateRequest>,
    mut route: ResMut<CurrentRoute>,
) {
    for event in events.read() {
        if route.path != event.path {
            info!("Navigating to {}", event.path);
            route.path = event.path.clone();
        }
    }
}

/// Plugin for routing
pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentRoute>()
            .add_message::<NavigateRequest>()
            .add_systems(
                PreUpdate,
                apply_navigation.run_if(on_message::<NavigateRequest>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_active() {
        let active = active_entry(&NAV_ENTRIES, "/models").unwrap();
        assert_eq!(active, &NAV_ENTRIES[1]);
        assert_eq!(active.label, "Models");
    }

    #[test]
    fn test_each_entry_matches_its_own_path_only() {
        for (i, entry) in NAV_ENTRIES.iter().enumerate() {
            let active = active_entry(&NAV_ENTRIES, entry.path);
            assert_eq!(active, Some(&NAV_ENTRIES[i]));
        }
    }

    #[test]
    fn test_trailing_slash_is_not_normalized() {
        assert!(active_entry(&NAV_ENTRIES, "/models/").is_none());
        assert!(active_entry(&NAV_ENTRIES, "/docs/").is_none());
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(active_entry(&NAV_ENTRIES, "/unknown").is_none());
        assert!(active_entry(&NAV_ENTRIES, "/models/m1").is_none());
        assert!(active_entry(&NAV_ENTRIES, "").is_none());
    }

    #[test]
    fn test_empty_entry_table_has_no_active_entry() {
        assert!(active_entry(&[], "/").is_none());
    }

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/models"), Page::Models);
        assert_eq!(Page::from_path("/docs"), Page::Docs);
        assert_eq!(Page::from_path("/models/"), Page::NotFound);
    }

    #[test]
    fn test_current_route_defaults_to_home() {
        let route = CurrentRoute::default();
        assert_eq!(route.path(), "/");
        assert_eq!(route.page(), Page::Home);
    }

    #[test]
    fn test_navigation_request_updates_route() {
        let mut app = App::new();
        app.add_plugins(NavigationPlugin);

        app.world_mut().write_message(NavigateRequest {
            path: "/docs".to_string(),
        });
        app.update();

        assert_eq!(app.world().resource::<CurrentRoute>().path(), "/docs");
    }
}
