mod action_enum;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Action; 13] = [
        Action::ToggleDevTools,
        Action::Reload,
        Action::GoBack,
        Action::GoForward,
        Action::BlurTab,
        Action::FocusNextPane,
        Action::FocusPrevPane,
        Action::NextTab,
        Action::PrevTab,
        Action::NewTab,
        Action::SplitRow,
        Action::SplitColumn,
        Action::ClosePane,
    ];

    #[test]
    fn all_actions_have_labels() {
        for action in ALL {
            assert!(!action.label().is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn navigation_actions() {
        assert!(Action::Reload.is_navigation());
        assert!(Action::GoBack.is_navigation());
        assert!(!Action::NewTab.is_navigation());
        assert!(!Action::BlurTab.is_navigation());
    }

    #[test]
    fn action_serde_roundtrip() {
        for action in ALL {
            let json = serde_json::to_string(&action).unwrap();
            let back: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, back);
        }
    }
}
