//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::forms::UpdateBalanceForm;
use crate::messages::ui_events::Focus;
use crate::store::Selection;

impl AppState {
    // ========================
    // Friend list
    // ========================

    pub fn highlight_next(&mut self) {
        if !self.store.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.store.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if !self.store.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.store.len() - 1);
        }
    }

    pub fn select_highlighted(&mut self) {
        let Some(id) = self.store.friends().get(self.highlighted).map(|f| f.id.clone()) else {
            return;
        };
        self.store.select_friend(&id);
        self.sync_forms();
    }

    // ========================
    // Composer
    // ========================

    pub fn toggle_composer(&mut self) {
        self.store.toggle_composer();
        if self.store.is_composer_open() {
            self.add_form.reset();
        }
        self.sync_forms();
    }

    pub fn submit_add_friend(&mut self) {
        if let Some(friend) = self.add_form.submit(self.ids.as_mut()) {
            self.store.add_friend(friend);
            self.sync_forms();
        }
    }

    // ========================
    // Balance form
    // ========================

    pub fn submit_balance(&mut self) {
        let Some(form) = self.balance_form.as_mut() else {
            return;
        };
        let Some(current) = self.store.find(form.friend_id()).map(|f| f.balance) else {
            return;
        };
        let id = form.friend_id().clone();
        let new_balance = form.submit(current);
        self.store.update_balance(&id, new_balance);
        self.sync_forms();
    }

    /// Rebind the balance form to the current selection and drop focus
    /// from fields that are no longer shown
    fn sync_forms(&mut self) {
        match self.store.selection() {
            Selection::None => self.balance_form = None,
            Selection::Friend(id) => {
                let bound = self.balance_form.as_ref().map(|f| f.friend_id());
                if bound != Some(id) {
                    self.balance_form = Some(UpdateBalanceForm::new(id.clone()));
                }
            }
        }

        if self.focus.is_field() && !self.visible_fields().contains(&self.focus) {
            self.focus = Focus::FriendList;
        }
    }

    // ========================
    // Focus
    // ========================

    pub fn next_field(&mut self) {
        let fields = self.visible_fields();
        self.focus = match fields.iter().position(|f| *f == self.focus) {
            Some(i) if i + 1 < fields.len() => fields[i + 1],
            Some(_) => Focus::FriendList,
            None => fields.first().copied().unwrap_or(Focus::FriendList),
        };
    }

    pub fn prev_field(&mut self) {
        let fields = self.visible_fields();
        self.focus = match fields.iter().position(|f| *f == self.focus) {
            Some(0) => Focus::FriendList,
            Some(i) => fields[i - 1],
            None => fields.last().copied().unwrap_or(Focus::FriendList),
        };
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::FriendList;
    }

    // ========================
    // Field editing
    // ========================

    pub fn enter_char(&mut self, c: char) {
        if let Some(field) = self.focus.add_field() {
            self.add_form.push_char(field, c);
        } else if let (Some(field), Some(form)) = (self.focus.balance_field(), self.balance_form.as_mut()) {
            form.push_char(field, c);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(field) = self.focus.add_field() {
            self.add_form.backspace(field);
        } else if let (Some(field), Some(form)) = (self.focus.balance_field(), self.balance_form.as_mut()) {
            form.backspace(field);
        }
    }

    /// Submit whichever form owns the focused field
    pub fn submit(&mut self) {
        if self.focus.add_field().is_some() {
            self.submit_add_friend();
        } else if self.focus.balance_field().is_some() {
            self.submit_balance();
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
