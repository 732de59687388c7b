//! Friend store - the shared list, selection and composer flag
//!
//! Every operation is total: it takes the current state and an intent
//! and leaves a new, consistent state behind.

use crate::models::{seed_friends, Friend, FriendId};

/// Which friend, if any, is targeted for a balance update
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    Friend(FriendId),
}

impl Selection {
    pub fn id(&self) -> Option<&FriendId> {
        match self {
            Selection::None => None,
            Selection::Friend(id) => Some(id),
        }
    }

    pub fn is(&self, id: &FriendId) -> bool {
        self.id() == Some(id)
    }
}

/// Owns the friend collection and everything shared between views
#[derive(Clone, Debug)]
pub struct FriendStore {
    friends: Vec<Friend>,
    selection: Selection,
    composer_open: bool,
}

impl Default for FriendStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl FriendStore {
    pub fn new(friends: Vec<Friend>) -> Self {
        FriendStore {
            friends,
            selection: Selection::None,
            composer_open: false,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_friends())
    }

    // ========================
    // Queries
    // ========================

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    pub fn find(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection.id().and_then(|id| self.find(id))
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selection.is(id)
    }

    pub fn is_composer_open(&self) -> bool {
        self.composer_open
    }

    // ========================
    // Mutations
    // ========================

    pub fn toggle_composer(&mut self) {
        self.composer_open = !self.composer_open;
    }

    /// Append a friend. The caller is responsible for building a valid record.
    pub fn add_friend(&mut self, friend: Friend) {
        tracing::info!(id = %friend.id, name = %friend.name, "Adding friend");
        self.friends.push(friend);
        self.composer_open = false;
        self.selection = Selection::None;
    }

    /// Select a friend, or clear the selection if it is already selected
    pub fn select_friend(&mut self, id: &FriendId) {
        self.selection = if self.selection.is(id) {
            Selection::None
        } else {
            Selection::Friend(id.clone())
        };
        self.composer_open = false;
    }

    /// Replace one friend's balance and clear the selection
    pub fn update_balance(&mut self, id: &FriendId, new_balance: f64) {
        match self.friends.iter_mut().find(|f| &f.id == id) {
            Some(friend) => {
                tracing::info!(%id, old = friend.balance, new = new_balance, "Updating balance");
                friend.balance = new_balance;
            }
            None => tracing::warn!(%id, "Balance update for unknown friend"),
        }
        self.selection = Selection::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> FriendId {
        FriendId::new(s)
    }

    #[test]
    fn test_seeded_store() {
        let store = FriendStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.selection(), &Selection::None);
        assert!(!store.is_composer_open());
    }

    #[test]
    fn test_toggle_composer_twice_closes() {
        let mut store = FriendStore::seeded();
        store.toggle_composer();
        assert!(store.is_composer_open());
        store.toggle_composer();
        assert!(!store.is_composer_open());
        assert_eq!(store.len(), 3);
        assert_eq!(store.selection(), &Selection::None);
    }

    #[test]
    fn test_add_friends_appends_in_order() {
        let mut store = FriendStore::seeded();
        store.toggle_composer();
        for n in 0..4 {
            let name = format!("Friend {}", n);
            store.add_friend(Friend::new(id(&format!("new-{}", n)), name, "img", 0.0));
        }
        assert_eq!(store.len(), 7);
        assert!(store.friends()[3..].iter().all(|f| f.balance == 0.0));
        assert_eq!(store.friends()[6].name, "Friend 3");
        assert!(!store.is_composer_open());
    }

    #[test]
    fn test_add_friend_clears_selection() {
        let mut store = FriendStore::seeded();
        store.select_friend(&id("933372"));
        store.add_friend(Friend::new(id("x"), "Mira", "img", 0.0));
        assert_eq!(store.selection(), &Selection::None);
    }

    #[test]
    fn test_select_same_friend_twice_clears() {
        let mut store = FriendStore::seeded();
        store.select_friend(&id("118836"));
        assert!(store.is_selected(&id("118836")));
        store.select_friend(&id("118836"));
        assert_eq!(store.selection(), &Selection::None);
    }

    #[test]
    fn test_select_other_friend_switches() {
        let mut store = FriendStore::seeded();
        store.select_friend(&id("118836"));
        store.select_friend(&id("933372"));
        assert_eq!(store.selection(), &Selection::Friend(id("933372")));
        assert_eq!(store.selected_friend().map(|f| f.name.as_str()), Some("Sarah"));
    }

    #[test]
    fn test_select_closes_composer() {
        let mut store = FriendStore::seeded();
        store.toggle_composer();
        assert!(store.is_composer_open());
        store.select_friend(&id("499476"));
        assert!(!store.is_composer_open());
    }

    #[test]
    fn test_update_balance_touches_only_target() {
        let mut store = FriendStore::seeded();
        let before = store.friends().to_vec();
        store.select_friend(&id("118836"));
        store.update_balance(&id("933372"), -123.5);

        assert_eq!(store.selection(), &Selection::None);
        for (old, new) in before.iter().zip(store.friends()) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.name, new.name);
            assert_eq!(old.image, new.image);
            if new.id == id("933372") {
                assert_eq!(new.balance, -123.5);
            } else {
                assert_eq!(old.balance, new.balance);
            }
        }
    }

    #[test]
    fn test_update_unknown_friend_still_clears_selection() {
        let mut store = FriendStore::seeded();
        let before = store.friends().to_vec();
        store.select_friend(&id("118836"));
        store.update_balance(&id("missing"), 1.0);
        assert_eq!(store.friends(), before.as_slice());
        assert_eq!(store.selection(), &Selection::None);
    }
}
