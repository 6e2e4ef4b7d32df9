//! In-memory account store keyed by case-insensitive username.

use crate::error::AccountError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tally_credits::CreditAccount;
use tally_types::{Category, Credits, UserId};

/// A registered user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: UserId,
    /// Username as registered (original casing preserved for display).
    pub username: String,
    /// PHC-format Argon2id hash.
    password_hash: String,
    /// Resolved home location label.
    pub location: String,
    pub credits: CreditAccount,
    pub preferred_categories: Vec<Category>,
}

/// All accounts, indexed by lowercased username and by id.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AccountStore {
    by_username: HashMap<String, UserId>,
    accounts: HashMap<UserId, Account>,
    next_user: u64,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account with a zero credit balance.
    ///
    /// Usernames are unique ignoring case; on collision no partial account
    /// is created.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        location: &str,
    ) -> Result<UserId, AccountError> {
        let key = username.to_lowercase();
        if self.by_username.contains_key(&key) {
            return Err(AccountError::UsernameTaken(username.to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::Hashing(e.to_string()))?
            .to_string();

        let id = UserId::new(self.next_user);
        self.next_user += 1;
        self.accounts.insert(
            id,
            Account {
                id,
                username: username.to_string(),
                password_hash,
                location: location.to_string(),
                credits: CreditAccount::open(id),
                preferred_categories: Vec::new(),
            },
        );
        self.by_username.insert(key, id);
        tracing::info!(user = %id, username, "account registered");
        Ok(id)
    }

    /// Verify credentials; username lookup ignores case.
    pub fn login(&self, username: &str, password: &str) -> Result<UserId, AccountError> {
        let id = self
            .by_username
            .get(&username.to_lowercase())
            .ok_or(AccountError::InvalidCredentials)?;
        let account = &self.accounts[id];
        let parsed = PasswordHash::new(&account.password_hash)
            .map_err(|e| AccountError::Hashing(e.to_string()))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AccountError::InvalidCredentials)?;
        Ok(*id)
    }

    /// Apply a credit delta; returns the new balance.
    pub fn update_credits(&mut self, user: UserId, delta: Credits) -> Result<Credits, AccountError> {
        let account = self
            .accounts
            .get_mut(&user)
            .ok_or(AccountError::UnknownUser(user))?;
        account.credits.apply(delta);
        Ok(account.credits.balance())
    }

    pub fn credits(&self, user: UserId) -> Result<Credits, AccountError> {
        self.accounts
            .get(&user)
            .map(|a| a.credits.balance())
            .ok_or(AccountError::UnknownUser(user))
    }

    pub fn set_preferred_categories(
        &mut self,
        user: UserId,
        categories: Vec<Category>,
    ) -> Result<(), AccountError> {
        let account = self
            .accounts
            .get_mut(&user)
            .ok_or(AccountError::UnknownUser(user))?;
        account.preferred_categories = categories;
        Ok(())
    }

    pub fn account(&self, user: UserId) -> Option<&Account> {
        self.accounts.get(&user)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
