//! App state - pure data structure with no I/O logic

use crate::forms::{AddFriendForm, UpdateBalanceForm};
use crate::messages::render::{BalanceFormView, FriendRow};
use crate::messages::ui_events::Focus;
use crate::messages::RenderState;
use crate::models::{IdSource, UuidSource};
use crate::store::FriendStore;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Shared friend state
    pub store: FriendStore,

    // Form-local state
    pub add_form: AddFriendForm,
    pub balance_form: Option<UpdateBalanceForm>,

    // UI state
    pub focus: Focus,
    pub highlighted: usize,
    pub show_help: bool,

    pub(crate) ids: Box<dyn IdSource>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AddFriendForm::default())
    }
}

impl AppState {
    pub fn new(add_form: AddFriendForm) -> Self {
        Self::with_id_source(add_form, Box::new(UuidSource))
    }

    pub fn with_id_source(add_form: AddFriendForm, ids: Box<dyn IdSource>) -> Self {
        AppState {
            store: FriendStore::seeded(),
            add_form,
            balance_form: None,
            focus: Focus::FriendList,
            highlighted: 0,
            show_help: false,
            ids,
        }
    }

    /// Fields that can currently take focus, in tab order
    pub fn visible_fields(&self) -> Vec<Focus> {
        let mut fields = Vec::new();
        if self.store.is_composer_open() {
            fields.push(Focus::AddName);
            fields.push(Focus::AddImage);
        }
        if self.balance_form.is_some() {
            fields.push(Focus::YouGave);
            fields.push(Focus::FriendGave);
        }
        fields
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let friends = self
            .store
            .friends()
            .iter()
            .map(|friend| FriendRow {
                friend: friend.clone(),
                is_selected: self.store.is_selected(&friend.id),
            })
            .collect();

        let balance_form = self.balance_form.as_ref().and_then(|form| {
            self.store.find(form.friend_id()).map(|friend| BalanceFormView {
                friend_name: friend.name.clone(),
                you_gave: form.you_gave.clone(),
                friend_gave: form.friend_gave.clone(),
            })
        });

        RenderState {
            friends,
            highlighted: self.highlighted,
            composer_open: self.store.is_composer_open(),
            add_name: self.add_form.name.clone(),
            add_image: self.add_form.image.clone(),
            balance_form,
            focus: self.focus,
            show_help: self.show_help,
        }
    }
}
