// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::domain::models::session::{SessionId, SessionState};
use crate::domain::repositories::session_repository::{SessionError, SessionStore};

struct Entry {
    state: SessionState,
    expires_at: DateTime<Utc>,
}

/// 内存会话存储
///
/// 进程内的分片并发映射。过期条目在读取时惰性清除，每次写入时整体清扫一次
pub struct MemorySessionStore {
    sessions: DashMap<SessionId, Entry>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// 当前保存的会话数量（包含尚未被清除的过期条目）
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &SessionId) -> Result<Option<SessionState>, SessionError> {
        let now = Utc::now();
        // The read guard must be dropped before remove_if takes the shard lock.
        let state = match self.sessions.get(id) {
            Some(entry) if entry.expires_at > now => Some(entry.state.clone()),
            Some(_) => None,
            None => return Ok(None),
        };

        if state.is_none() {
            self.sessions.remove_if(id, |_, entry| entry.expires_at <= now);
        }
        Ok(state)
    }

    async fn put(&self, id: SessionId, state: SessionState) -> Result<(), SessionError> {
        let now = Utc::now();
        // Abandoned sessions are never read again, so reclaim them here.
        self.sessions.retain(|_, entry| entry.expires_at > now);
        self.sessions.insert(
            id,
            Entry {
                state,
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }
}
