//! Root mount.
//!
//! [`Root::mount`] locates the mount point in a host document, renders the
//! component tree once and installs it. The returned [`MountedRoot`] owns the
//! element from then on; every navigation goes through it and replaces the
//! element's contents with a fresh render.

use ballot_core::{Document, History, MountError, MountPoint, NavigationEvent, Render};

/// Entry point for installing a tree into a host document.
pub struct Root;

impl Root {
    /// Mount `tree` into the element identified by `id`.
    ///
    /// Fails with [`MountError::MissingMountPoint`] if the document has no
    /// such element. There is no retry.
    pub fn mount<D, T>(
        document: &D,
        id: &str,
        tree: T,
        history: History,
    ) -> Result<MountedRoot<D::Element, T>, MountError>
    where
        D: Document,
        T: Render,
    {
        let element = document
            .element_by_id(id)
            .ok_or_else(|| MountError::MissingMountPoint { id: id.to_owned() })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(id = %id, location = %history.current(), "Mounting root");

        let mut mounted = MountedRoot {
            element,
            tree,
            history,
        };
        mounted.refresh();
        Ok(mounted)
    }
}

/// A tree installed in a mount point.
pub struct MountedRoot<E, T> {
    element: E,
    tree: T,
    history: History,
}

impl<E, T> MountedRoot<E, T>
where
    E: MountPoint,
    T: Render,
{
    /// Re-render the current location and replace the mount point contents.
    pub fn refresh(&mut self) {
        let node = self.tree.render();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = %self.element.id(),
            location = %self.history.current(),
            empty = node.is_empty(),
            "Installing render"
        );

        self.element.replace_children(node);
    }

    /// Navigate to a new path and re-render.
    pub fn navigate(&mut self, event: impl Into<NavigationEvent>) {
        self.history.push(event);
        self.refresh();
    }

    /// Go back one history entry and re-render.
    ///
    /// Returns `false`, leaving the mount point untouched, when already at
    /// the first entry.
    pub fn back(&mut self) -> bool {
        let moved = self.history.back();
        if moved {
            self.refresh();
        }
        moved
    }

    /// The current location.
    pub fn location(&self) -> NavigationEvent {
        self.history.current()
    }

    /// The shared history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The mounted tree.
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// The mount point.
    pub fn element(&self) -> &E {
        &self.element
    }
}
