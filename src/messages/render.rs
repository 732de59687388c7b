//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_AVATAR_URL;
use crate::messages::ui_events::Focus;
use crate::models::{seed_friends, Friend};

/// One row of the friend list
#[derive(Debug, Clone, PartialEq)]
pub struct FriendRow {
    pub friend: Friend,
    pub is_selected: bool,
}

/// Balance form contents for the selected friend
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceFormView {
    pub friend_name: String,
    pub you_gave: String,
    pub friend_gave: String,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Friend list
    pub friends: Vec<FriendRow>,
    pub highlighted: usize,

    // Composer
    pub composer_open: bool,
    pub add_name: String,
    pub add_image: String,

    // Balance form, present while a friend is selected
    pub balance_form: Option<BalanceFormView>,

    // UI state
    pub focus: Focus,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            friends: seed_friends()
                .into_iter()
                .map(|friend| FriendRow {
                    friend,
                    is_selected: false,
                })
                .collect(),
            highlighted: 0,
            composer_open: false,
            add_name: String::new(),
            add_image: String::from(DEFAULT_AVATAR_URL),
            balance_form: None,
            focus: Focus::FriendList,
            show_help: false,
        }
    }
}
