use crate::core::zodiac::ZodiacSign;
use crate::models::domain::{Permission, Tab, REQUIRED_PERMISSIONS};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::{broadcast, RwLock};

/// Identifier the host frame knows this mini-app by.
pub const APP_ID: &str = "signsync-zodiac-matcher";

/// Errors that can occur on session transitions
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("missing required permissions: {0:?}")]
    MissingPermissions(Vec<Permission>),
}

/// Messages exchanged with the host frame.
///
/// Wire shape is `{ "type": ..., "payload": ... }`. Outbound messages are
/// fire-and-forget; there is no ack, retry, or versioning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostMessage {
    PermissionsGranted {
        #[serde(rename = "appId")]
        app_id: String,
        permissions: Vec<Permission>,
    },
    PermissionsDenied {
        #[serde(rename = "appId")]
        app_id: String,
    },
    MiniAppLogout {
        #[serde(rename = "appId")]
        app_id: String,
    },
    MiniAppReady {
        #[serde(rename = "appId")]
        app_id: String,
    },
    SuggestZodiacUsers {
        sign: ZodiacSign,
    },
}

/// Broadcast channel standing in for the host frame's message port.
///
/// Posting never fails from the caller's point of view: with no subscriber
/// attached the message is simply dropped, which mirrors posting to a parent
/// frame that is not listening.
pub struct HostBridge {
    tx: broadcast::Sender<HostMessage>,
}

impl HostBridge {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Post a message toward the host, fire-and-forget.
    pub fn post(&self, message: HostMessage) {
        tracing::debug!("posting host message: {:?}", message);
        let _ = self.tx.send(message);
    }

    /// Subscribe to outbound messages (used by tests and any embedded host).
    pub fn subscribe(&self) -> broadcast::Receiver<HostMessage> {
        self.tx.subscribe()
    }
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Per-session state: granted permissions, active tab, readiness.
///
/// Locks are never held across an await point.
pub struct Session {
    id: uuid::Uuid,
    granted: RwLock<Vec<Permission>>,
    active_tab: RwLock<Tab>,
    suggested_sign: RwLock<Option<ZodiacSign>>,
    ready_sent: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            granted: RwLock::new(Vec::new()),
            active_tab: RwLock::new(Tab::Horoscope),
            suggested_sign: RwLock::new(None),
            ready_sent: AtomicBool::new(false),
        }
    }

    /// Grant permissions and notify the host.
    ///
    /// All required permissions must be present in one grant; a partial set
    /// is rejected with the missing ones listed and nothing changes. The
    /// readiness signal fires on the first successful grant only.
    pub async fn grant(
        &self,
        permissions: Vec<Permission>,
        bridge: &HostBridge,
    ) -> Result<(), SessionError> {
        let missing: Vec<Permission> = REQUIRED_PERMISSIONS
            .iter()
            .filter(|required| !permissions.contains(required))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(SessionError::MissingPermissions(missing));
        }

        *self.granted.write().await = permissions.clone();

        bridge.post(HostMessage::PermissionsGranted {
            app_id: APP_ID.to_string(),
            permissions,
        });

        if !self.ready_sent.swap(true, Ordering::SeqCst) {
            bridge.post(HostMessage::MiniAppReady {
                app_id: APP_ID.to_string(),
            });
        }

        Ok(())
    }

    /// Deny the permission request: clears the grant and tells the host to
    /// log the mini-app out.
    pub async fn deny(&self, bridge: &HostBridge) {
        self.granted.write().await.clear();
        bridge.post(HostMessage::PermissionsDenied {
            app_id: APP_ID.to_string(),
        });
        bridge.post(HostMessage::MiniAppLogout {
            app_id: APP_ID.to_string(),
        });
    }

    /// Handle a message arriving from the host frame.
    ///
    /// Only SUGGEST_ZODIAC_USERS has an inbound meaning: it switches the
    /// active tab to Search with the suggested sign preselected. Everything
    /// else is ignored.
    pub async fn handle_inbound(&self, message: HostMessage) {
        match message {
            HostMessage::SuggestZodiacUsers { sign } => {
                *self.suggested_sign.write().await = Some(sign);
                *self.active_tab.write().await = Tab::Search;
                tracing::info!("host suggested {} users, switching to search", sign);
            }
            other => {
                tracing::debug!("ignoring inbound host message: {:?}", other);
            }
        }
    }

    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    pub async fn granted(&self) -> Vec<Permission> {
        self.granted.read().await.clone()
    }

    pub fn is_ready(&self) -> bool {
        self.ready_sent.load(Ordering::SeqCst)
    }

    pub async fn active_tab(&self) -> Tab {
        *self.active_tab.read().await
    }

    pub async fn set_active_tab(&self, tab: Tab) {
        *self.active_tab.write().await = tab;
    }

    pub async fn suggested_sign(&self) -> Option<ZodiacSign> {
        *self.suggested_sign.read().await
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_permissions() -> Vec<Permission> {
        REQUIRED_PERMISSIONS.to_vec()
    }

    #[test]
    fn test_message_wire_shape() {
        let msg = HostMessage::PermissionsDenied {
            app_id: APP_ID.to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "PERMISSIONS_DENIED");
        assert_eq!(json["payload"]["appId"], "signsync-zodiac-matcher");
    }

    #[test]
    fn test_suggest_message_round_trip() {
        let json = r#"{"type":"SUGGEST_ZODIAC_USERS","payload":{"sign":"Leo"}}"#;
        let msg: HostMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            HostMessage::SuggestZodiacUsers {
                sign: ZodiacSign::Leo
            }
        );
    }

    #[tokio::test]
    async fn test_partial_grant_is_rejected() {
        let session = Session::new();
        let bridge = HostBridge::default();

        let err = session
            .grant(vec![Permission::Profile, Permission::Messaging], &bridge)
            .await
            .unwrap_err();
        let SessionError::MissingPermissions(missing) = err;
        assert_eq!(
            missing,
            vec![Permission::FarcasterSearch, Permission::ActivityData]
        );
        assert!(session.granted().await.is_empty());
        assert!(!session.is_ready());
    }

    #[tokio::test]
    async fn test_full_grant_fires_ready_once() {
        let session = Session::new();
        let bridge = HostBridge::default();
        let mut rx = bridge.subscribe();

        session.grant(all_permissions(), &bridge).await.unwrap();
        session.grant(all_permissions(), &bridge).await.unwrap();

        let mut ready_count = 0;
        while let Ok(msg) = rx.try_recv() {
            if matches!(msg, HostMessage::MiniAppReady { .. }) {
                ready_count += 1;
            }
        }
        assert_eq!(ready_count, 1);
        assert!(session.is_ready());
    }

    #[tokio::test]
    async fn test_deny_posts_logout() {
        let session = Session::new();
        let bridge = HostBridge::default();
        let mut rx = bridge.subscribe();

        session.grant(all_permissions(), &bridge).await.unwrap();
        session.deny(&bridge).await;

        assert!(session.granted().await.is_empty());

        let mut saw_denied = false;
        let mut saw_logout = false;
        while let Ok(msg) = rx.try_recv() {
            match msg {
                HostMessage::PermissionsDenied { .. } => saw_denied = true,
                HostMessage::MiniAppLogout { .. } => saw_logout = true,
                _ => {}
            }
        }
        assert!(saw_denied && saw_logout);
    }

    #[tokio::test]
    async fn test_suggest_switches_tab() {
        let session = Session::new();
        assert_eq!(session.active_tab().await, Tab::Horoscope);

        session
            .handle_inbound(HostMessage::SuggestZodiacUsers {
                sign: ZodiacSign::Scorpio,
            })
            .await;

        assert_eq!(session.active_tab().await, Tab::Search);
        assert_eq!(session.suggested_sign().await, Some(ZodiacSign::Scorpio));
    }

    #[tokio::test]
    async fn test_other_inbound_messages_ignored() {
        let session = Session::new();
        session
            .handle_inbound(HostMessage::MiniAppLogout {
                app_id: APP_ID.to_string(),
            })
            .await;
        assert_eq!(session.active_tab().await, Tab::Horoscope);
    }

    #[test]
    fn test_post_without_subscriber_does_not_panic() {
        let bridge = HostBridge::default();
        bridge.post(HostMessage::MiniAppLogout {
            app_id: APP_ID.to_string(),
        });
    }
}
