use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{GroupId, Orientation, PaneId};

/// Commands emitted by the input router and UI handlers for the host window.
///
/// The tab group store performs the structural ones; the rest (focus,
/// clipboard, window chrome) are interpreted by the host alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum HostCommand {
    CreateTab { url: String },
    /// Queue `url` as a background tab of the active group.
    OpenBackgroundTab { url: String },
    CreateSplit { url: String, orientation: Orientation },
    CloseActivePane,
    FocusNextPane,
    FocusPrevPane,
    CycleTab { forward: bool },
    BlurTab,
    CopyText(String),
    Minimize,
    ToggleMaximize,
    Close,
}

impl HostCommand {
    /// Whether the tab group store acts on this command.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            HostCommand::CreateTab { .. }
                | HostCommand::OpenBackgroundTab { .. }
                | HostCommand::CreateSplit { .. }
                | HostCommand::CloseActivePane
                | HostCommand::FocusNextPane
                | HostCommand::FocusPrevPane
                | HostCommand::CycleTab { .. }
        )
    }
}

/// Notifications about store and surface lifecycle, for observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShellEvent {
    GroupOpened(GroupId),
    GroupClosed(GroupId),
    PaneOpened { group: GroupId, pane: PaneId },
    PaneClosed { group: GroupId, pane: PaneId },
    SurfaceReady(PaneId),
    SurfaceFailed { pane: PaneId, reason: String },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ShellEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(ShellEvent::GroupOpened(GroupId(1)));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, ShellEvent::GroupOpened(GroupId(1))));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ShellEvent::Shutdown);

        assert!(matches!(rx1.recv().await.unwrap(), ShellEvent::Shutdown));
        assert!(matches!(rx2.recv().await.unwrap(), ShellEvent::Shutdown));
    }

    #[tokio::test]
    async fn pane_events_keep_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let group = GroupId(1);
        let pane = PaneId(2);

        bus.publish(ShellEvent::PaneOpened { group, pane });
        bus.publish(ShellEvent::SurfaceReady(pane));
        bus.publish(ShellEvent::PaneClosed { group, pane });

        assert!(matches!(
            rx.recv().await.unwrap(),
            ShellEvent::PaneOpened { pane: PaneId(2), .. }
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            ShellEvent::SurfaceReady(PaneId(2))
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            ShellEvent::PaneClosed { pane: PaneId(2), .. }
        ));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(ShellEvent::Shutdown), 0);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomethingNew","data":null}"#;
        let event: ShellEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(event, ShellEvent::Unknown));
    }

    #[test]
    fn host_command_wire_format() {
        let cmd = HostCommand::CreateSplit {
            url: "https://a".into(),
            orientation: Orientation::Column,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"create-split\""));
        assert!(json.contains("\"column\""));
        let back: HostCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn structural_commands() {
        assert!(HostCommand::CreateTab { url: "x".into() }.is_structural());
        assert!(HostCommand::OpenBackgroundTab { url: "x".into() }.is_structural());
        assert!(HostCommand::CloseActivePane.is_structural());
        assert!(!HostCommand::BlurTab.is_structural());
        assert!(!HostCommand::CopyText("x".into()).is_structural());
        assert!(!HostCommand::Minimize.is_structural());
    }
}
