//! In-memory Slack workspace for tests and local runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::command::domain::UserRecord;
use crate::command::ports::{SlackApi, SlackApiError, SlackApiResult};

/// A workspace capability that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// [`SlackApi::list_users`]
    ListUsers,
    /// [`SlackApi::disable_user`]
    DisableUser,
    /// [`SlackApi::invite_guest`]
    InviteGuest,
    /// [`SlackApi::invite_restricted`]
    InviteRestricted,
    /// [`SlackApi::resolve_channel_name`]
    ResolveChannelName,
    /// [`SlackApi::post_message`]
    PostMessage,
}

/// Recorded `disable_user` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledUser {
    /// Team name passed by the caller.
    pub team_name: String,
    /// ID of the disabled user.
    pub user_id: String,
}

/// Tier requested by a recorded invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationTier {
    /// Sent through `invite_guest`.
    Guest,
    /// Sent through `invite_restricted`.
    Restricted,
}

/// Recorded invitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invitation {
    /// Which capability sent it.
    pub tier: InvitationTier,
    /// Team name passed by the caller.
    pub team_name: String,
    /// Channel the invitee joins.
    pub channel_id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Invitee email.
    pub email: String,
}

/// Recorded `post_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    /// Destination channel.
    pub channel_id: String,
    /// Message text.
    pub text: String,
}

/// Thread-safe in-memory workspace that records every mutation.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlackWorkspace {
    state: Arc<RwLock<WorkspaceState>>,
}

#[derive(Debug, Default)]
struct WorkspaceState {
    users: Vec<UserRecord>,
    channels: HashMap<String, String>,
    failures: HashMap<Capability, String>,
    directory_fetches: usize,
    disabled: Vec<DisabledUser>,
    invitations: Vec<Invitation>,
    posts: Vec<PostedMessage>,
}

impl InMemorySlackWorkspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a workspace whose directory holds `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let state = WorkspaceState {
            users: users.into_iter().collect(),
            ..WorkspaceState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Appends users to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the state lock is poisoned.
    pub fn add_users(&self, users: impl IntoIterator<Item = UserRecord>) -> SlackApiResult<()> {
        self.write()?.users.extend(users);
        Ok(())
    }

    /// Registers a channel name for [`SlackApi::resolve_channel_name`].
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the state lock is poisoned.
    pub fn add_channel(
        &self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> SlackApiResult<()> {
        self.write()?.channels.insert(id.into(), name.into());
        Ok(())
    }

    /// Makes `capability` fail with `message` on every subsequent call.
    ///
    /// # Errors
    ///
    /// Returns [`SlackApiError`] when the state lock is poisoned.
    pub fn fail(&self, capability: Capability, message: impl Into<String>) -> SlackApiResult<()> {
        self.write()?.failures.insert(capability, message.into());
        Ok(())
    }

    /// Returns how many times the directory was listed.
    #[must_use]
    pub fn directory_fetches(&self) -> usize {
        self.read().map_or(0, |state| state.directory_fetches)
    }

    /// Returns recorded `disable_user` calls in order.
    #[must_use]
    pub fn disabled_users(&self) -> Vec<DisabledUser> {
        self.read()
            .map(|state| state.disabled.clone())
            .unwrap_or_default()
    }

    /// Returns recorded invitations in order.
    #[must_use]
    pub fn invitations(&self) -> Vec<Invitation> {
        self.read()
            .map(|state| state.invitations.clone())
            .unwrap_or_default()
    }

    /// Returns recorded posts in order.
    #[must_use]
    pub fn posted_messages(&self) -> Vec<PostedMessage> {
        self.read()
            .map(|state| state.posts.clone())
            .unwrap_or_default()
    }

    fn read(&self) -> SlackApiResult<RwLockReadGuard<'_, WorkspaceState>> {
        self.state
            .read()
            .map_err(|err| SlackApiError::new(err.to_string()))
    }

    fn write(&self) -> SlackApiResult<RwLockWriteGuard<'_, WorkspaceState>> {
        self.state
            .write()
            .map_err(|err| SlackApiError::new(err.to_string()))
    }

    /// Takes the write lock and fails if `capability` is configured to.
    fn begin(
        &self,
        capability: Capability,
    ) -> SlackApiResult<RwLockWriteGuard<'_, WorkspaceState>> {
        let state = self.write()?;
        if let Some(message) = state.failures.get(&capability) {
            return Err(SlackApiError::new(message.clone()));
        }
        Ok(state)
    }

    fn record_invitation(
        &self,
        tier: InvitationTier,
        invitation: [&str; 5],
    ) -> SlackApiResult<()> {
        let capability = match tier {
            InvitationTier::Guest => Capability::InviteGuest,
            InvitationTier::Restricted => Capability::InviteRestricted,
        };
        let mut state = self.begin(capability)?;
        let [team_name, channel_id, first_name, last_name, email] = invitation;
        state.invitations.push(Invitation {
            tier,
            team_name: team_name.to_owned(),
            channel_id: channel_id.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
        });
        Ok(())
    }
}

impl SlackApi for InMemorySlackWorkspace {
    fn list_users(&self) -> SlackApiResult<Vec<UserRecord>> {
        let mut state = self.write()?;
        state.directory_fetches += 1;
        if let Some(message) = state.failures.get(&Capability::ListUsers) {
            return Err(SlackApiError::new(message.clone()));
        }
        Ok(state.users.clone())
    }

    fn disable_user(&self, team_name: &str, user_id: &str) -> SlackApiResult<()> {
        let mut state = self.begin(Capability::DisableUser)?;
        state.disabled.push(DisabledUser {
            team_name: team_name.to_owned(),
            user_id: user_id.to_owned(),
        });
        Ok(())
    }

    fn invite_guest(
        &self,
        team_name: &str,
        channel_id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> SlackApiResult<()> {
        self.record_invitation(
            InvitationTier::Guest,
            [team_name, channel_id, first_name, last_name, email],
        )
    }

    fn invite_restricted(
        &self,
        team_name: &str,
        channel_id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> SlackApiResult<()> {
        self.record_invitation(
            InvitationTier::Restricted,
            [team_name, channel_id, first_name, last_name, email],
        )
    }

    fn resolve_channel_name(&self, channel_id: &str) -> SlackApiResult<String> {
        let state = self.begin(Capability::ResolveChannelName)?;
        state
            .channels
            .get(channel_id)
            .cloned()
            .ok_or_else(|| SlackApiError::new("channel_not_found"))
    }

    fn post_message(&self, channel_id: &str, text: &str) -> SlackApiResult<()> {
        let mut state = self.begin(Capability::PostMessage)?;
        state.posts.push(PostedMessage {
            channel_id: channel_id.to_owned(),
            text: text.to_owned(),
        });
        Ok(())
    }
}
