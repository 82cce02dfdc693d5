mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn id_display_prefixes() {
        assert_eq!(PaneId(42).to_string(), "pane-42");
        assert_eq!(TabId(3).to_string(), "tab-3");
        assert_eq!(GroupId(1).to_string(), "group-1");
    }

    #[test]
    fn pane_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PaneId(1));
        set.insert(PaneId(2));
        set.insert(PaneId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn orientation_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Orientation::Row).unwrap(), "\"row\"");
        let back: Orientation = serde_json::from_str("\"column\"").unwrap();
        assert_eq!(back, Orientation::Column);
    }

    #[test]
    fn orientation_display() {
        assert_eq!(Orientation::Row.to_string(), "row");
        assert_eq!(Orientation::Column.to_string(), "column");
    }
}
