//! Wire DTOs and query builders for the Solace REST API.
//!
//! DESIGN
//! ======
//! These types mirror server payloads so serde round-trips stay lossless.
//! Filter dimensions are closed enums rather than loose strings, so an
//! illegal filter combination cannot be represented, and every listable
//! entity implements `livelist::ListItem` to plug into the shared
//! synchronizer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use livelist::{ListItem, SortOrder};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A post as represented on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier (UUID string).
    pub id: String,
    /// Author user identifier (UUID string).
    pub author_id: String,
    /// Author display name, denormalized for list rendering.
    pub author_name: String,
    /// Markdown body.
    pub body: String,
    /// Whether the post has passed moderation and is publicly visible.
    #[serde(default)]
    pub approved: bool,
    /// Creation timestamp in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
    /// Last-modification timestamp; bumped by the server on every write.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub updated_at: i64,
}

impl ListItem for Post {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_ts(&self) -> i64 {
        self.created_at
    }

    fn revision(&self) -> i64 {
        self.updated_at
    }
}

/// A user row as listed in the admin dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountRow {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Platform role.
    pub role: Role,
    /// Creation timestamp in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
    /// Last-modification timestamp; bumped by the server on every write.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub updated_at: i64,
}

impl ListItem for AccountRow {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_ts(&self) -> i64 {
        self.created_at
    }

    fn revision(&self) -> i64 {
        self.updated_at
    }
}

/// Platform role of a user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Moderator,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }
}

/// A direct message inside one conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier; optimistic placeholders carry a local
    /// `temp-` prefixed UUID until the server confirms.
    pub id: String,
    /// Conversation this message belongs to (UUID string).
    pub conversation_id: String,
    /// Sending user identifier (UUID string).
    pub sender_id: String,
    /// Sender display name, denormalized for thread rendering.
    pub sender_name: String,
    /// Plain-text body.
    pub body: String,
    /// Creation timestamp in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub created_at: i64,
    /// Local-only flag: true while this is an unconfirmed placeholder.
    #[serde(default, skip_serializing)]
    pub pending: bool,
}

impl ListItem for Message {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_ts(&self) -> i64 {
        self.created_at
    }
}

/// A conversation summary for the messages sidebar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation identifier (UUID string).
    pub id: String,
    /// The other participant's user identifier (UUID string).
    pub peer_id: String,
    /// The other participant's display name.
    pub peer_name: String,
    /// Body of the most recent message, if any.
    #[serde(default)]
    pub last_message: Option<String>,
    /// Timestamp of the most recent message in milliseconds since the epoch.
    #[serde(default)]
    pub last_ts: i64,
    /// Number of messages not yet seen by the current user.
    #[serde(default)]
    pub unread: i64,
}

/// The authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Platform role.
    #[serde(default)]
    pub role: Role,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Whether this user may see the admin dashboard.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Moderator)
    }
}

/// Extended public profile with statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form self description, if set.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// ISO 8601 date string of account creation, if available.
    pub member_since: Option<String>,
    /// Aggregated usage statistics.
    pub stats: ProfileStats,
}

/// Aggregate statistics shown on a profile page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Total number of approved posts by this user.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub post_count: i64,
    /// Number of users following this user.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub follower_count: i64,
    /// Number of users this user follows.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub following_count: i64,
}

/// Moderation-status filter for post lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
}

impl StatusFilter {
    /// Query-string value, `None` when the dimension is unfiltered.
    #[must_use]
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Pending => Some("pending"),
            Self::Approved => Some("approved"),
        }
    }

    /// Whether a post with this approval state belongs in the filtered view.
    #[must_use]
    pub fn matches(self, approved: bool) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !approved,
            Self::Approved => approved,
        }
    }
}

/// Role filter for user lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Member,
    Moderator,
    Admin,
}

impl RoleFilter {
    /// Query-string value, `None` when the dimension is unfiltered.
    #[must_use]
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Member => Some("member"),
            Self::Moderator => Some("moderator"),
            Self::Admin => Some("admin"),
        }
    }

    /// Whether a user with this role belongs in the filtered view.
    #[must_use]
    pub fn matches(self, role: Role) -> bool {
        match self {
            Self::All => true,
            Self::Member => role == Role::Member,
            Self::Moderator => role == Role::Moderator,
            Self::Admin => role == Role::Admin,
        }
    }
}

/// Query parameters for `GET /api/posts`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostQuery {
    pub offset: usize,
    pub limit: usize,
    pub search: String,
    pub status: StatusFilter,
    pub author_id: Option<String>,
    pub sort: SortOrder,
}

impl PostQuery {
    /// Render as a URL query string, omitting unfiltered dimensions.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut out = format!(
            "offset={}&limit={}&sort={}",
            self.offset,
            self.limit,
            sort_param(self.sort)
        );
        if let Some(status) = self.status.as_param() {
            out.push_str("&status=");
            out.push_str(status);
        }
        if let Some(author_id) = &self.author_id {
            out.push_str("&author_id=");
            out.push_str(&encode_component(author_id));
        }
        if !self.search.is_empty() {
            out.push_str("&search=");
            out.push_str(&encode_component(&self.search));
        }
        out
    }
}

/// Query parameters for `GET /api/users`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserQuery {
    pub offset: usize,
    pub limit: usize,
    pub search: String,
    pub role: RoleFilter,
    pub sort: SortOrder,
}

impl UserQuery {
    /// Render as a URL query string, omitting unfiltered dimensions.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut out = format!(
            "offset={}&limit={}&sort={}",
            self.offset,
            self.limit,
            sort_param(self.sort)
        );
        if let Some(role) = self.role.as_param() {
            out.push_str("&role=");
            out.push_str(role);
        }
        if !self.search.is_empty() {
            out.push_str("&search=");
            out.push_str(&encode_component(&self.search));
        }
        out
    }
}

/// Query-string value for a sort order.
#[must_use]
pub fn sort_param(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::NewestFirst => "newest",
        SortOrder::OldestFirst => "oldest",
    }
}

/// Percent-encode a query-string component.
///
/// Unreserved characters pass through; everything else is encoded byte-wise,
/// which matches how the server decodes multi-byte UTF-8 search terms.
#[must_use]
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
