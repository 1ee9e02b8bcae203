//! Booklet selection.
//!
//! While selection mode is on, tapping a history page toggles it in or out
//! of the booklet pick list. Picks keep *click order*, not history order,
//! and that order is exactly the page order of the exported booklet.
//! Leaving selection mode, for any reason, drops the picks; a failed export
//! leaves both the picks and the mode untouched so the user can retry
//! without re-selecting.
//!
//! History eviction can orphan a pick. Those references are pruned eagerly
//! (see [`Selection::prune`]) so an export never contains a page the user
//! can no longer see.

use crate::Artifact;

/// Multi-select state over the history, in click order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    active: bool,
    picks: Vec<Artifact>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether selection mode is on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips selection mode. Turning it off always clears the picks.
    pub fn toggle_mode(&mut self) {
        if self.active {
            self.exit();
        } else {
            self.active = true;
        }
    }

    /// Leaves selection mode and drops all picks.
    pub fn exit(&mut self) {
        self.active = false;
        self.picks.clear();
    }

    /// Adds the page if absent, removes it if present. Toggling twice is a
    /// no-op for this page and never disturbs the others.
    pub fn toggle(&mut self, artifact: &Artifact) {
        if let Some(pos) = self.picks.iter().position(|pick| pick == artifact) {
            self.picks.remove(pos);
        } else {
            self.picks.push(artifact.clone());
        }
    }

    pub fn is_selected(&self, artifact: &Artifact) -> bool {
        self.picks.contains(artifact)
    }

    /// Picks in click order.
    pub fn picks(&self) -> &[Artifact] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Drops any pick that history just evicted. Remaining picks keep
    /// their relative click order.
    pub fn prune(&mut self, evicted: &[Artifact]) {
        if evicted.is_empty() || self.picks.is_empty() {
            return;
        }
        self.picks.retain(|pick| !evicted.contains(pick));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(n: usize) -> Artifact {
        Artifact::from_data_uri(format!("data:image/png;base64,img{n}"))
    }

    #[test]
    fn double_toggle_restores_membership() {
        let mut selection = Selection::new();
        selection.toggle(&art(1));
        selection.toggle(&art(2));
        selection.toggle(&art(1));
        selection.toggle(&art(1));
        assert!(selection.is_selected(&art(1)));
        assert!(selection.is_selected(&art(2)));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn picks_keep_click_order() {
        let mut selection = Selection::new();
        selection.toggle(&art(2));
        selection.toggle(&art(1));
        selection.toggle(&art(3));
        assert_eq!(selection.picks(), &[art(2), art(1), art(3)]);

        // Removing the middle pick keeps the order of the rest.
        selection.toggle(&art(1));
        assert_eq!(selection.picks(), &[art(2), art(3)]);
    }

    #[test]
    fn leaving_mode_clears_picks() {
        let mut selection = Selection::new();
        selection.toggle_mode();
        assert!(selection.is_active());
        selection.toggle(&art(1));
        selection.toggle_mode();
        assert!(!selection.is_active());
        assert!(selection.is_empty());

        // Re-entering starts from scratch.
        selection.toggle_mode();
        assert!(selection.is_active());
        assert!(selection.is_empty());
    }

    #[test]
    fn prune_drops_only_evicted_picks() {
        let mut selection = Selection::new();
        selection.toggle(&art(1));
        selection.toggle(&art(2));
        selection.toggle(&art(3));
        selection.prune(&[art(2), art(9)]);
        assert_eq!(selection.picks(), &[art(1), art(3)]);

        selection.prune(&[]);
        assert_eq!(selection.len(), 2);
    }
}
