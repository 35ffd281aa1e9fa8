use super::content::Language;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn title(&self, language: Language) -> &'static str {
        match (self, language) {
            (NotificationKind::Success, Language::Vn) => "Thành Công!",
            (NotificationKind::Success, Language::En) => "Success!",
            (NotificationKind::Error, Language::Vn) => "Lỗi!",
            (NotificationKind::Error, Language::En) => "Error!",
        }
    }
}

pub fn close_label(language: Language) -> &'static str {
    match language {
        Language::Vn => "Đóng",
        Language::En => "Close",
    }
}

/// Transient overlay state. Independent of the lifecycle phase.
///
/// Dismissing only hides the overlay; kind and message stay until the next
/// `show` so a closing overlay does not flicker to empty content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NotificationState {
    pub visible: bool,
    pub kind: NotificationKind,
    pub message: String,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was shown before; at most one notification is visible.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.kind = kind;
        self.message = message.into();
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let state = NotificationState::new();
        assert!(!state.is_visible());
        assert!(state.message.is_empty());
    }

    #[test]
    fn test_dismiss_keeps_content() {
        let mut state = NotificationState::new();
        state.show(NotificationKind::Error, "boom");
        state.dismiss();

        assert!(!state.is_visible());
        assert_eq!(state.kind, NotificationKind::Error);
        assert_eq!(state.message, "boom");
    }

    #[test]
    fn test_show_replaces_previous() {
        let mut state = NotificationState::new();
        state.show(NotificationKind::Error, "first");
        state.show(NotificationKind::Success, "second");

        assert!(state.is_visible());
        assert_eq!(state.kind, NotificationKind::Success);
        assert_eq!(state.message, "second");
    }

    #[test]
    fn test_localized_chrome() {
        assert_eq!(NotificationKind::Error.title(Language::En), "Error!");
        assert_eq!(NotificationKind::Success.title(Language::Vn), "Thành Công!");
        assert_eq!(close_label(Language::Vn), "Đóng");
    }
}
