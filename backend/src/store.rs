//! In-process storage for users and questions.
//!
//! Handlers only see the `UserStore` and `QuestionStore` traits through
//! `AppState`, so a persistent implementation can be swapped in without
//! touching them. The in-memory implementations keep all of their state
//! behind a single `RwLock` each: the uniqueness check, id assignment and
//! append of a new record happen inside one write guard.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use common::{AuthorSnapshot, QuestionDto, TagDto, UserDto};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("{0} store lock poisoned")]
    Poisoned(&'static str),
}

// --- Users ---

/// A stored user. The password is kept in plaintext; this is a demo directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password: String,
    pub reputation: i64,
    pub avatar: Option<String>,
}

impl UserRecord {
    /// Strips the password for the wire.
    pub fn to_dto(&self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            reputation: self.reputation,
            avatar: self.avatar.clone(),
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

pub trait UserStore: Send + Sync {
    /// Stores a new user with reputation 0 and no avatar.
    /// Fails with `DuplicateEmail` if the email (exact match) is taken.
    fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// The earliest registered user, if any.
    fn first(&self) -> Result<Option<UserRecord>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;
}

#[derive(Default)]
struct UserTable {
    by_id: BTreeMap<i64, UserRecord>,
    id_by_email: HashMap<String, i64>,
    next_id: i64,
}

pub struct InMemoryUserStore {
    inner: RwLock<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Builds a store from existing records. Later records with an email that
    /// is already present are dropped.
    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let mut table = UserTable::default();
        for user in users {
            if table.id_by_email.contains_key(&user.email) || table.by_id.contains_key(&user.id) {
                tracing::warn!("Skipping duplicate seed user {}", user.email);
                continue;
            }
            table.id_by_email.insert(user.email.clone(), user.id);
            table.by_id.insert(user.id, user);
        }
        table.next_id = table.by_id.keys().next_back().map_or(1, |max| max + 1);
        Self {
            inner: RwLock::new(table),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned("user"))?;

        if table.id_by_email.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let id = table.next_id;
        table.next_id += 1;

        let record = UserRecord {
            id,
            email: user.email,
            name: user.name,
            password: user.password,
            reputation: 0,
            avatar: None,
        };
        table.id_by_email.insert(record.email.clone(), id);
        table.by_id.insert(id, record.clone());

        Ok(record)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned("user"))?;
        Ok(table
            .id_by_email
            .get(email)
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    fn first(&self) -> Result<Option<UserRecord>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned("user"))?;
        Ok(table.by_id.values().next().cloned())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned("user"))?;
        Ok(table.by_id.len())
    }
}

// --- Questions ---

#[derive(Clone, Debug)]
pub struct NewQuestion {
    pub title: String,
    pub description: String,
    pub author: AuthorSnapshot,
    pub tags: Vec<TagDto>,
    pub created_at: String,
}

pub trait QuestionStore: Send + Sync {
    /// Every question in insertion order.
    fn all(&self) -> Result<Vec<QuestionDto>, StoreError>;

    fn get(&self, id: i64) -> Result<Option<QuestionDto>, StoreError>;

    /// Appends a question with zeroed counters, unresolved, and
    /// `updated_at == created_at`.
    fn insert(&self, question: NewQuestion) -> Result<QuestionDto, StoreError>;
}

#[derive(Default)]
struct QuestionTable {
    // Insertion order is the tie-breaker when listing, so keep a Vec.
    rows: Vec<QuestionDto>,
    index: HashMap<i64, usize>,
    next_id: i64,
}

pub struct InMemoryQuestionStore {
    inner: RwLock<QuestionTable>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::with_questions(Vec::new())
    }

    pub fn with_questions(questions: impl IntoIterator<Item = QuestionDto>) -> Self {
        let mut table = QuestionTable::default();
        for question in questions {
            if table.index.contains_key(&question.id) {
                tracing::warn!("Skipping duplicate seed question {}", question.id);
                continue;
            }
            table.index.insert(question.id, table.rows.len());
            table.rows.push(question);
        }
        table.next_id = table.index.keys().max().map_or(1, |max| max + 1);
        Self {
            inner: RwLock::new(table),
        }
    }
}

impl Default for InMemoryQuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore for InMemoryQuestionStore {
    fn all(&self) -> Result<Vec<QuestionDto>, StoreError> {
        let table = self
            .inner
            .read()
            .map_err(|_| StoreError::Poisoned("question"))?;
        Ok(table.rows.clone())
    }

    fn get(&self, id: i64) -> Result<Option<QuestionDto>, StoreError> {
        let table = self
            .inner
            .read()
            .map_err(|_| StoreError::Poisoned("question"))?;
        Ok(table
            .index
            .get(&id)
            .and_then(|&pos| table.rows.get(pos))
            .cloned())
    }

    fn insert(&self, question: NewQuestion) -> Result<QuestionDto, StoreError> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| StoreError::Poisoned("question"))?;

        let id = table.next_id;
        table.next_id += 1;

        let record = QuestionDto {
            id,
            title: question.title,
            description: question.description,
            author: question.author,
            tags: question.tags,
            vote_count: 0,
            answer_count: 0,
            view_count: 0,
            is_resolved: false,
            updated_at: question.created_at.clone(),
            created_at: question.created_at,
        };
        let pos = table.rows.len();
        table.index.insert(id, pos);
        table.rows.push(record.clone());

        Ok(record)
    }
}
