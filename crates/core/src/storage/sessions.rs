//! Session storage
//!
//! The whole session collection lives in memory behind a reader/writer
//! lock and is rewritten to the medium as one JSON array after every
//! mutation. Mutations hold the write lock across both the rewrite and
//! the in-memory update, and only commit to memory once the rewrite has
//! succeeded, so memory always mirrors the last persisted collection.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, instrument, warn};

use super::medium::Medium;
use super::parse::{read_list, write_list};
use super::users::UserDirectory;
use crate::error::{ConfigError, ConsistencyError, Error, Result, StorageError};
use crate::invariants::assert_index_invariants;
use crate::models::{Session, UserSummary};
use crate::token;

/// Session collection plus the indexes derived from it
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) sessions: Vec<Session>,
    /// Token to username
    pub(crate) by_token: HashMap<String, String>,
    /// Username to positions in `sessions`, in stored order
    pub(crate) by_user: HashMap<String, Vec<usize>>,
    /// Records left out of the indexes because their user is unknown
    pub(crate) skipped: Vec<ConsistencyError>,
}

impl SessionState {
    fn build(sessions: Vec<Session>, users: &UserDirectory) -> Self {
        let mut by_token = HashMap::with_capacity(sessions.len());
        let mut by_user: HashMap<String, Vec<usize>> = HashMap::new();
        let mut skipped = Vec::new();

        for (i, session) in sessions.iter().enumerate() {
            if !users.find_user(&session.username) {
                skipped.push(ConsistencyError {
                    token: session.token.clone(),
                    username: session.username.clone(),
                });
                continue;
            }
            by_token.insert(session.token.clone(), session.username.clone());
            by_user.entry(session.username.clone()).or_default().push(i);
        }

        let state = Self {
            sessions,
            by_token,
            by_user,
            skipped,
        };
        assert_index_invariants(&state, users);
        state
    }

    fn report_skipped(&self) {
        for err in &self.skipped {
            warn!(error = %err, "Session left out of indexes");
        }
    }
}

pub struct SessionStore {
    users: Arc<UserDirectory>,
    medium: Arc<dyn Medium>,
    file: String,
    token_length: usize,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Load the sessions file; an absent file is an empty collection
    ///
    /// Sessions naming unknown users are kept on disk but left out of the
    /// indexes, and are available from [`SessionStore::consistency_errors`].
    #[instrument(skip(users, medium), fields(location = %medium.locate(&file)))]
    pub fn load(
        users: Arc<UserDirectory>,
        medium: Arc<dyn Medium>,
        file: String,
        token_length: usize,
    ) -> Result<Self> {
        let store = Self::empty(users, medium, file, token_length)?;
        let sessions = store.read_sessions()?;
        let state = store.reindex(sessions);
        info!(
            sessions = state.sessions.len(),
            skipped = state.skipped.len(),
            "Loaded sessions"
        );
        *store.write() = state;
        Ok(store)
    }

    /// A store with no sessions, without touching the medium
    pub fn empty(
        users: Arc<UserDirectory>,
        medium: Arc<dyn Medium>,
        file: String,
        token_length: usize,
    ) -> Result<Self> {
        if token_length == 0 {
            return Err(ConfigError::Invalid("token_length must be at least 1".into()).into());
        }
        Ok(Self {
            users,
            medium,
            file,
            token_length,
            state: RwLock::new(SessionState::default()),
        })
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    /// Start a session for a known user and return its token
    #[instrument(skip(self))]
    pub fn create_session(&self, username: &str) -> Result<String> {
        if !self.users.find_user(username) {
            return Err(Error::UnknownUser(username.to_string()));
        }

        let mut state = self.write();
        let token = token::generate(self.token_length);
        let mut sessions = state.sessions.clone();
        sessions.push(Session::new(username, token.clone()));
        self.persist(&sessions)?;

        *state = SessionState::build(sessions, &self.users);
        debug!(token = %token, "Stored new session");
        Ok(token)
    }

    /// Username owning `token`, if any
    pub fn resolve_token(&self, token: &str) -> Option<String> {
        self.read().by_token.get(token).cloned()
    }

    /// Remove the first session with `token`, returning whether one existed
    ///
    /// The collection is reloaded from the medium first so records written
    /// by other processes are not lost by the rewrite.
    #[instrument(skip(self, token))]
    pub fn delete_session(&self, token: &str) -> Result<bool> {
        let mut state = self.write();
        let mut sessions = self.read_sessions()?;

        let Some(offset) = sessions.iter().position(|s| s.token == token) else {
            debug!("Did not find the cookie");
            *state = self.reindex(sessions);
            return Ok(false);
        };

        sessions.remove(offset);
        self.persist(&sessions)?;
        *state = self.reindex(sessions);
        debug!(token = %token, "Deleted session");
        Ok(true)
    }

    /// Remove every session belonging to `username`, returning how many
    #[instrument(skip(self))]
    pub fn delete_user_sessions(&self, username: &str) -> Result<usize> {
        if !self.users.find_user(username) {
            return Err(Error::UnknownUser(username.to_string()));
        }

        let mut state = self.write();
        let mut sessions = self.read_sessions()?;
        let before = sessions.len();
        sessions.retain(|s| s.username != username);
        let removed = before - sessions.len();

        if removed > 0 {
            self.persist(&sessions)?;
        }
        *state = self.reindex(sessions);
        info!(removed, "Deleted user sessions");
        Ok(removed)
    }

    /// Remove the sessions file and forget every session
    #[instrument(skip(self))]
    pub fn delete_all_sessions(&self) -> Result<()> {
        let mut state = self.write();
        let existed = self
            .medium
            .remove(&self.file)
            .map_err(|source| StorageError::Remove {
                location: self.medium.locate(&self.file),
                source,
            })?;
        *state = SessionState::default();
        info!(existed, "Deleted all sessions");
        Ok(())
    }

    /// A user's session with the given token
    pub fn session(&self, username: &str, token: &str) -> Option<Session> {
        let state = self.read();
        state
            .by_user
            .get(username)?
            .iter()
            .map(|&i| &state.sessions[i])
            .find(|s| s.token == token)
            .cloned()
    }

    /// All indexed sessions of one user, in stored order
    pub fn sessions_for(&self, username: &str) -> Vec<Session> {
        let state = self.read();
        state
            .by_user
            .get(username)
            .map(|positions| positions.iter().map(|&i| state.sessions[i].clone()).collect())
            .unwrap_or_default()
    }

    /// Registered users with their session counts
    pub fn list_users(&self) -> Vec<UserSummary> {
        let state = self.read();
        self.users
            .users()
            .iter()
            .map(|user| UserSummary {
                username: user.username.clone(),
                sessions: state.by_user.get(&user.username).map_or(0, Vec::len),
            })
            .collect()
    }

    /// Every stored session, in stored order
    pub fn list_sessions(&self) -> Vec<Session> {
        self.read().sessions.clone()
    }

    /// Sessions left out of the indexes by the last rebuild
    pub fn consistency_errors(&self) -> Vec<ConsistencyError> {
        self.read().skipped.clone()
    }

    pub fn len(&self) -> usize {
        self.read().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_sessions(&self) -> Result<Vec<Session>> {
        match read_list::<Session>(self.medium.as_ref(), &self.file)? {
            Some(sessions) => Ok(sessions),
            None => {
                info!(location = %self.medium.locate(&self.file), "There is no sessions file");
                Ok(Vec::new())
            }
        }
    }

    /// Index a collection just read from the medium, warning about orphans
    fn reindex(&self, sessions: Vec<Session>) -> SessionState {
        let state = SessionState::build(sessions, &self.users);
        state.report_skipped();
        state
    }

    fn persist(&self, sessions: &[Session]) -> Result<()> {
        debug!(sessions = sessions.len(), "Writing sessions file");
        write_list(self.medium.as_ref(), &self.file, sessions)?;
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    use tracing_subscriber::fmt::MakeWriter;

    use crate::models::User;
    use crate::storage::{DirMedium, MemoryMedium};

    const FILE: &str = "logins.json";

    /// Collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` with log output captured, returning its result and the log
    fn with_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    fn ghost() -> ConsistencyError {
        ConsistencyError {
            token: "ggggg".into(),
            username: "ghost".into(),
        }
    }

    /// Append a session for a user the directory does not know
    fn append_orphan(medium: &dyn Medium) {
        let mut on_disk = read_list::<Session>(medium, FILE)
            .unwrap()
            .unwrap_or_default();
        on_disk.push(Session::new("ghost", "ggggg"));
        write_list(medium, FILE, &on_disk).unwrap();
    }

    fn users() -> Arc<UserDirectory> {
        Arc::new(UserDirectory::from_users(vec![
            User::new("alice", "pw1"),
            User::new("bob", "pw2"),
        ]))
    }

    fn store_on(medium: Arc<dyn Medium>) -> SessionStore {
        SessionStore::load(users(), medium, FILE.to_string(), 5).unwrap()
    }

    fn stored_tokens(medium: &dyn Medium) -> Vec<String> {
        read_list::<Session>(medium, FILE)
            .unwrap()
            .unwrap_or_default()
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn test_load_absent_file() {
        let store = store_on(Arc::new(MemoryMedium::new()));
        assert!(store.is_empty());
        assert!(store.consistency_errors().is_empty());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let medium: Arc<dyn Medium> = Arc::new(MemoryMedium::new().with_blob(FILE, "[{"));
        let result = SessionStore::load(users(), medium, FILE.to_string(), 5);
        assert!(matches!(
            result,
            Err(Error::Storage(StorageError::Malformed { .. }))
        ));
    }

    #[test]
    fn test_create_and_resolve() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());

        let token = store.create_session("alice").unwrap();
        assert_eq!(token.len(), 5);
        assert_eq!(store.resolve_token(&token).as_deref(), Some("alice"));
        assert_eq!(stored_tokens(medium.as_ref()), vec![token]);
    }

    #[test]
    fn test_create_for_unknown_user() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());

        let err = store.create_session("mallory").unwrap_err();
        assert!(matches!(err, Error::UnknownUser(name) if name == "mallory"));
        assert!(store.is_empty());
        assert!(medium.read(FILE).unwrap().is_none());
    }

    #[test]
    fn test_create_write_failure_leaves_state() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        let kept = store.create_session("alice").unwrap();

        medium.fail_writes(true);
        let err = store.create_session("bob").unwrap_err();
        assert!(matches!(err, Error::Storage(StorageError::Write { .. })));
        assert_eq!(store.len(), 1);
        assert!(store.sessions_for("bob").is_empty());
        assert_eq!(store.resolve_token(&kept).as_deref(), Some("alice"));
    }

    #[test]
    fn test_multiple_sessions_per_user() {
        let store = store_on(Arc::new(MemoryMedium::new()));
        let first = store.create_session("alice").unwrap();
        let second = store.create_session("alice").unwrap();
        store.create_session("bob").unwrap();

        let tokens: Vec<_> = store
            .sessions_for("alice")
            .into_iter()
            .map(|s| s.token)
            .collect();
        assert_eq!(tokens, vec![first.clone(), second]);
        assert_eq!(store.session("alice", &first).map(|s| s.token), Some(first.clone()));
        assert!(store.session("bob", &first).is_none());
    }

    #[test]
    fn test_delete_session() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        let gone = store.create_session("alice").unwrap();
        let kept = store.create_session("bob").unwrap();

        assert!(store.delete_session(&gone).unwrap());
        assert!(store.resolve_token(&gone).is_none());
        assert_eq!(store.resolve_token(&kept).as_deref(), Some("bob"));
        assert_eq!(stored_tokens(medium.as_ref()), vec![kept]);
    }

    #[test]
    fn test_delete_first_session_of_several() {
        let store = store_on(Arc::new(MemoryMedium::new()));
        let first = store.create_session("alice").unwrap();
        let second = store.create_session("alice").unwrap();
        let third = store.create_session("bob").unwrap();

        assert!(store.delete_session(&first).unwrap());
        let remaining: Vec<_> = store.list_sessions().into_iter().map(|s| s.token).collect();
        assert_eq!(remaining, vec![second, third]);
    }

    #[test]
    fn test_delete_missing_token_is_noop() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        let kept = store.create_session("alice").unwrap();

        // "1" can never be generated, tokens are letters only
        assert!(!store.delete_session("1").unwrap());
        assert_eq!(stored_tokens(medium.as_ref()), vec![kept]);
    }

    #[test]
    fn test_delete_session_sees_external_writes() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        let ours = store.create_session("alice").unwrap();

        // Another process appended a session behind our back
        let mut on_disk = read_list::<Session>(medium.as_ref(), FILE).unwrap().unwrap();
        on_disk.push(Session::new("bob", "zzzzz"));
        write_list(medium.as_ref(), FILE, &on_disk).unwrap();

        assert!(store.delete_session(&ours).unwrap());
        assert_eq!(stored_tokens(medium.as_ref()), vec!["zzzzz".to_string()]);
        assert_eq!(store.resolve_token("zzzzz").as_deref(), Some("bob"));
    }

    #[test]
    fn test_delete_all_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let medium: Arc<dyn Medium> = Arc::new(DirMedium::new(dir.path()));
        let store = store_on(medium.clone());
        let a = store.create_session("alice").unwrap();
        let b = store.create_session("bob").unwrap();
        assert!(dir.path().join(FILE).exists());

        store.delete_all_sessions().unwrap();
        assert!(!dir.path().join(FILE).exists());
        assert!(store.resolve_token(&a).is_none());
        assert!(store.resolve_token(&b).is_none());
        assert!(store.is_empty());

        // Nothing left to remove is still fine
        store.delete_all_sessions().unwrap();
    }

    #[test]
    fn test_delete_all_failure_keeps_sessions() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        let token = store.create_session("alice").unwrap();

        medium.fail_writes(true);
        let err = store.delete_all_sessions().unwrap_err();
        assert!(matches!(err, Error::Storage(StorageError::Remove { .. })));
        assert_eq!(store.resolve_token(&token).as_deref(), Some("alice"));
    }

    #[test]
    fn test_delete_user_sessions() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        store.create_session("alice").unwrap();
        store.create_session("alice").unwrap();
        let kept = store.create_session("bob").unwrap();

        assert_eq!(store.delete_user_sessions("alice").unwrap(), 2);
        assert_eq!(stored_tokens(medium.as_ref()), vec![kept]);
        assert_eq!(store.delete_user_sessions("alice").unwrap(), 0);
        assert!(matches!(
            store.delete_user_sessions("mallory"),
            Err(Error::UnknownUser(_))
        ));
    }

    #[test]
    fn test_unknown_user_sessions_are_reported() {
        let json = r#"[
            {"login": "alice", "cookie": "aaaaa", "last": "2020-01-01T00:00:00Z"},
            {"login": "ghost", "cookie": "ggggg", "last": "2020-01-01T00:00:00Z"},
            {"login": "bob", "cookie": "bbbbb", "last": "2020-01-01T00:00:00Z"}
        ]"#;
        let medium = Arc::new(MemoryMedium::new().with_blob(FILE, json));
        let store = store_on(medium.clone());

        assert_eq!(
            store.consistency_errors(),
            vec![ConsistencyError {
                token: "ggggg".into(),
                username: "ghost".into(),
            }]
        );
        assert!(store.resolve_token("ggggg").is_none());
        assert_eq!(store.resolve_token("aaaaa").as_deref(), Some("alice"));
        assert_eq!(store.resolve_token("bbbbb").as_deref(), Some("bob"));

        // The orphan survives rewrites
        store.delete_session("aaaaa").unwrap();
        assert_eq!(stored_tokens(medium.as_ref()), vec!["ggggg", "bbbbb"]);
    }

    #[test]
    fn test_delete_session_warns_about_orphans_on_reload() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        let ours = store.create_session("alice").unwrap();
        let kept = store.create_session("bob").unwrap();
        append_orphan(medium.as_ref());

        let (deleted, logs) = with_logs(|| store.delete_session(&ours).unwrap());

        assert!(deleted);
        assert!(logs.contains("Session left out of indexes"), "{logs}");
        assert!(logs.contains("ghost"), "{logs}");
        assert_eq!(store.consistency_errors(), vec![ghost()]);
        assert!(store.resolve_token("ggggg").is_none());
        assert_eq!(store.resolve_token(&kept).as_deref(), Some("bob"));
        assert_eq!(stored_tokens(medium.as_ref()), vec![kept, "ggggg".to_string()]);
    }

    #[test]
    fn test_delete_missing_token_warns_about_orphans() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        append_orphan(medium.as_ref());

        let (deleted, logs) = with_logs(|| store.delete_session("nosuch").unwrap());

        assert!(!deleted);
        assert!(logs.contains("Session left out of indexes"), "{logs}");
        assert_eq!(store.consistency_errors(), vec![ghost()]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_user_sessions_warns_about_orphans() {
        let medium = Arc::new(MemoryMedium::new());
        let store = store_on(medium.clone());
        store.create_session("alice").unwrap();
        append_orphan(medium.as_ref());

        let (removed, logs) = with_logs(|| store.delete_user_sessions("alice").unwrap());

        assert_eq!(removed, 1);
        assert!(logs.contains("Session left out of indexes"), "{logs}");
        assert!(logs.contains("ghost"), "{logs}");
        assert_eq!(store.consistency_errors(), vec![ghost()]);
        assert!(store.resolve_token("ggggg").is_none());
        assert_eq!(stored_tokens(medium.as_ref()), vec!["ggggg".to_string()]);
    }

    #[test]
    fn test_zero_token_length_is_rejected() {
        let medium: Arc<dyn Medium> = Arc::new(MemoryMedium::new());

        let empty = SessionStore::empty(users(), medium.clone(), FILE.to_string(), 0);
        assert!(matches!(empty, Err(Error::Config(ConfigError::Invalid(_)))));

        let loaded = SessionStore::load(users(), medium.clone(), FILE.to_string(), 0);
        assert!(matches!(loaded, Err(Error::Config(ConfigError::Invalid(_)))));
        assert!(medium.read(FILE).unwrap().is_none());
    }

    #[test]
    fn test_reload_reproduces_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let medium: Arc<dyn Medium> = Arc::new(DirMedium::new(dir.path()));
        let store = store_on(medium.clone());

        let mut issued = Vec::new();
        for i in 0..20 {
            let user = if i % 2 == 0 { "alice" } else { "bob" };
            issued.push((store.create_session(user).unwrap(), user));
        }

        let reloaded = store_on(medium);
        assert_eq!(reloaded.len(), 20);
        for (token, user) in &issued {
            assert_eq!(
                reloaded.resolve_token(token),
                store.resolve_token(token),
                "token {token} of {user}"
            );
        }
        assert_eq!(reloaded.list_sessions(), store.list_sessions());
    }

    #[test]
    fn test_concurrent_creates_lose_nothing() {
        let names: Vec<String> = (0..16).map(|i| format!("user{i}")).collect();
        let directory = Arc::new(UserDirectory::from_users(
            names.iter().map(|n| User::new(n.as_str(), "pw")).collect(),
        ));
        let dir = tempfile::tempdir().unwrap();
        let medium: Arc<dyn Medium> = Arc::new(DirMedium::new(dir.path()));
        let store =
            SessionStore::load(directory.clone(), medium.clone(), FILE.to_string(), 5).unwrap();

        std::thread::scope(|scope| {
            for name in &names {
                let store = &store;
                scope.spawn(move || store.create_session(name).unwrap());
            }
        });

        let reloaded = SessionStore::load(directory, medium, FILE.to_string(), 5).unwrap();
        assert_eq!(reloaded.len(), names.len());
        for name in &names {
            assert_eq!(reloaded.sessions_for(name).len(), 1, "{name}");
        }
    }

    #[test]
    fn test_concurrent_creates_and_deletes() {
        const EXISTING: usize = 12;
        const CREATED: usize = 12;

        let names: Vec<String> = (0..EXISTING + CREATED).map(|i| format!("user{i}")).collect();
        let directory = Arc::new(UserDirectory::from_users(
            names.iter().map(|n| User::new(n.as_str(), "pw")).collect(),
        ));
        let dir = tempfile::tempdir().unwrap();
        let medium: Arc<dyn Medium> = Arc::new(DirMedium::new(dir.path()));
        let store =
            SessionStore::load(directory.clone(), medium.clone(), FILE.to_string(), 5).unwrap();

        let doomed: Vec<String> = names[..EXISTING]
            .iter()
            .map(|n| store.create_session(n).unwrap())
            .collect();

        let created: Vec<String> = std::thread::scope(|scope| {
            let store = &store;
            for token in &doomed {
                scope.spawn(move || assert!(store.delete_session(token).unwrap()));
            }
            let handles: Vec<_> = names[EXISTING..]
                .iter()
                .map(|name| scope.spawn(move || store.create_session(name).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(store.len(), CREATED);
        let reloaded = SessionStore::load(directory, medium, FILE.to_string(), 5).unwrap();
        assert_eq!(reloaded.len(), CREATED);
        assert_eq!(reloaded.list_sessions(), store.list_sessions());
        for token in &doomed {
            assert!(reloaded.resolve_token(token).is_none(), "{token}");
        }
        for (token, name) in created.iter().zip(&names[EXISTING..]) {
            assert_eq!(reloaded.resolve_token(token).as_deref(), Some(name.as_str()));
        }
    }

    #[test]
    fn test_list_users_counts_sessions() {
        let store = store_on(Arc::new(MemoryMedium::new()));
        store.create_session("bob").unwrap();
        store.create_session("bob").unwrap();

        let users = store.list_users();
        assert_eq!(
            users,
            vec![
                UserSummary {
                    username: "alice".into(),
                    sessions: 0,
                },
                UserSummary {
                    username: "bob".into(),
                    sessions: 2,
                },
            ]
        );
    }
}
