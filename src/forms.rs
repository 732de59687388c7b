//! Form state local to the add-friend and update-balance panels

use crate::constants::{DEFAULT_AMOUNT, DEFAULT_AVATAR_URL};
use crate::models::{Friend, FriendId, IdSource};

/// Field of the add-friend form
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AddField {
    Name,
    Image,
}

/// Add-friend composer state
#[derive(Clone, Debug)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    default_image: String,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_URL)
    }
}

impl AddFriendForm {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        AddFriendForm {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    pub fn field_mut(&mut self, field: AddField) -> &mut String {
        match field {
            AddField::Name => &mut self.name,
            AddField::Image => &mut self.image,
        }
    }

    pub fn push_char(&mut self, field: AddField, c: char) {
        self.field_mut(field).push(c);
    }

    pub fn backspace(&mut self, field: AddField) {
        self.field_mut(field).pop();
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
    }

    /// Build a new friend from the form, or `None` if a field is empty.
    ///
    /// The image URL gets a `?=<id>` suffix so identical base URLs still
    /// resolve to distinct avatars.
    pub fn submit(&mut self, ids: &mut dyn IdSource) -> Option<Friend> {
        if self.name.is_empty() || self.image.is_empty() {
            tracing::debug!("Ignoring add-friend submission with empty fields");
            return None;
        }

        let id = ids.new_id();
        let image = format!("{}?={}", self.image, id);
        let friend = Friend::new(id, self.name.clone(), image, 0.0);
        self.reset();
        Some(friend)
    }
}

/// Field of the update-balance form
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BalanceField {
    YouGave,
    FriendGave,
}

/// Split-bill form, bound to one friend for its whole lifetime
#[derive(Clone, Debug)]
pub struct UpdateBalanceForm {
    friend_id: FriendId,
    pub you_gave: String,
    pub friend_gave: String,
}

impl UpdateBalanceForm {
    pub fn new(friend_id: FriendId) -> Self {
        UpdateBalanceForm {
            friend_id,
            you_gave: String::from(DEFAULT_AMOUNT),
            friend_gave: String::from(DEFAULT_AMOUNT),
        }
    }

    pub fn friend_id(&self) -> &FriendId {
        &self.friend_id
    }

    pub fn field_mut(&mut self, field: BalanceField) -> &mut String {
        match field {
            BalanceField::YouGave => &mut self.you_gave,
            BalanceField::FriendGave => &mut self.friend_gave,
        }
    }

    /// Only characters that can appear in a signed decimal are accepted
    pub fn push_char(&mut self, field: BalanceField, c: char) {
        let value = self.field_mut(field);
        let accepted = c.is_ascii_digit()
            || (c == '.' && !value.contains('.'))
            || (c == '-' && (value.is_empty() || value == DEFAULT_AMOUNT));
        if accepted {
            // Typing over the untouched default replaces it
            if value == DEFAULT_AMOUNT && c != '.' {
                value.clear();
            }
            value.push(c);
        } else {
            tracing::debug!(?c, "Ignoring non-numeric input");
        }
    }

    pub fn backspace(&mut self, field: BalanceField) {
        self.field_mut(field).pop();
    }

    pub fn reset(&mut self) {
        self.you_gave = String::from(DEFAULT_AMOUNT);
        self.friend_gave = String::from(DEFAULT_AMOUNT);
    }

    /// New balance after applying both amounts; fields reset afterwards
    pub fn submit(&mut self, current_balance: f64) -> f64 {
        let new_balance = current_balance + parse_amount(&self.you_gave) - parse_amount(&self.friend_gave);
        self.reset();
        new_balance
    }
}

/// Parses an amount field. Empty or non-numeric input counts as zero.
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SequentialIds(u32);

    impl IdSource for SequentialIds {
        fn new_id(&mut self) -> FriendId {
            self.0 += 1;
            FriendId::new(format!("id-{}", self.0))
        }
    }

    #[test]
    fn test_submit_builds_friend_and_resets() {
        let mut form = AddFriendForm::default();
        form.name = String::from("Mira");
        let friend = form.submit(&mut SequentialIds(0)).unwrap();

        assert_eq!(friend.id, FriendId::new("id-1"));
        assert_eq!(friend.name, "Mira");
        assert_eq!(friend.image, "https://i.pravatar.cc/48?=id-1");
        assert_eq!(friend.balance, 0.0);
        assert_eq!(form.name, "");
        assert_eq!(form.image, "https://i.pravatar.cc/48");
    }

    #[test]
    fn test_submit_with_empty_name_is_ignored() {
        let mut form = AddFriendForm::default();
        form.image = String::from("https://example.com/a.png");
        assert!(form.submit(&mut SequentialIds(0)).is_none());
        assert_eq!(form.image, "https://example.com/a.png");
    }

    #[test]
    fn test_submit_with_empty_image_is_ignored() {
        let mut form = AddFriendForm::default();
        form.name = String::from("Mira");
        form.image.clear();
        assert!(form.submit(&mut SequentialIds(0)).is_none());
        assert_eq!(form.name, "Mira");
    }

    #[test]
    fn test_custom_default_image() {
        let mut form = AddFriendForm::new("https://avatars.local/64");
        form.push_char(AddField::Name, 'Z');
        form.push_char(AddField::Image, 'x');
        form.backspace(AddField::Image);
        let friend = form.submit(&mut SequentialIds(4)).unwrap();
        assert_eq!(friend.image, "https://avatars.local/64?=id-5");
        assert_eq!(form.image, "https://avatars.local/64");
    }

    #[test]
    fn test_balance_submit() {
        let mut form = UpdateBalanceForm::new(FriendId::new("933372"));
        form.you_gave = String::from("5");
        assert_eq!(form.submit(20.0), 25.0);
        assert_eq!(form.you_gave, "0");
        assert_eq!(form.friend_gave, "0");
    }

    #[test]
    fn test_balance_submit_friend_paid() {
        let mut form = UpdateBalanceForm::new(FriendId::new("118836"));
        form.you_gave = String::from("10");
        form.friend_gave = String::from("12.5");
        assert_eq!(form.submit(-7.0), -9.5);
    }

    #[test]
    fn test_parse_amount_coerces_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount(" 4.25 "), 4.25);
    }

    #[test]
    fn test_numeric_input_filtering() {
        let mut form = UpdateBalanceForm::new(FriendId::new("1"));
        for c in "1a2.5.x".chars() {
            form.push_char(BalanceField::YouGave, c);
        }
        assert_eq!(form.you_gave, "12.5");

        form.friend_gave.clear();
        form.push_char(BalanceField::FriendGave, '-');
        form.push_char(BalanceField::FriendGave, '3');
        form.push_char(BalanceField::FriendGave, '-');
        assert_eq!(form.friend_gave, "-3");
    }
}
