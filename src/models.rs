use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque friend identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(id: impl Into<String>) -> Self {
        FriendId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A counterparty in shared expenses
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    /// Negative: you owe them. Positive: they owe you.
    pub balance: f64,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>, balance: f64) -> Self {
        Friend {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human readable balance line for the friend list
    pub fn balance_label(&self) -> String {
        match self.status() {
            BalanceStatus::YouOwe(amount) => {
                format!("You owe {} ${}", self.name, format_amount(amount))
            }
            BalanceStatus::TheyOwe(amount) => {
                format!("{} owes you ${}", self.name, format_amount(amount))
            }
            BalanceStatus::Even => format!("You and {} are even!", self.name),
        }
    }
}

/// Sign of a balance, carrying the absolute amount
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BalanceStatus {
    YouOwe(f64),
    TheyOwe(f64),
    Even,
}

impl BalanceStatus {
    /// Classifies by the balance rounded to cents, so a label never reads `$0.00`
    pub fn from_balance(balance: f64) -> Self {
        let cents = (balance * 100.0).round() / 100.0;
        if cents < 0.0 {
            BalanceStatus::YouOwe(cents.abs())
        } else if cents > 0.0 {
            BalanceStatus::TheyOwe(cents)
        } else {
            BalanceStatus::Even
        }
    }
}

/// Formats an amount without decimals when integral, otherwise with two
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Source of fresh friend identifiers
pub trait IdSource: Send {
    fn new_id(&mut self) -> FriendId;
}

/// Random v4 UUIDs
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn new_id(&mut self) -> FriendId {
        FriendId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// The friends every session starts with
pub fn seed_friends() -> Vec<Friend> {
    vec![
        Friend::new(FriendId::new("118836"), "Clark", "https://i.pravatar.cc/48?u=118836", -7.0),
        Friend::new(FriendId::new("933372"), "Sarah", "https://i.pravatar.cc/48?u=933372", 20.0),
        Friend::new(FriendId::new("499476"), "Anthony", "https://i.pravatar.cc/48?u=499476", 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_labels() {
        let seeds = seed_friends();
        assert_eq!(seeds[0].balance_label(), "You owe Clark $7");
        assert_eq!(seeds[1].balance_label(), "Sarah owes you $20");
        assert_eq!(seeds[2].balance_label(), "You and Anthony are even!");
    }

    #[test]
    fn test_fractional_amount() {
        let friend = Friend::new(FriendId::new("1"), "Mira", "img", -7.5);
        assert_eq!(friend.status(), BalanceStatus::YouOwe(7.5));
        assert_eq!(friend.balance_label(), "You owe Mira $7.50");
    }

    #[test]
    fn test_sub_cent_balance_is_even() {
        let friend = Friend::new(FriendId::new("118836"), "Clark", "img", -7.0 + 7.004);
        assert_eq!(friend.status(), BalanceStatus::Even);
        assert_eq!(friend.balance_label(), "You and Clark are even!");

        let friend = Friend::new(FriendId::new("118836"), "Clark", "img", 7.004);
        assert_eq!(friend.balance_label(), "Clark owes you $7");
    }

    #[test]
    fn test_uuid_source_is_unique() {
        let mut ids = UuidSource;
        assert_ne!(ids.new_id(), ids.new_id());
    }
}
