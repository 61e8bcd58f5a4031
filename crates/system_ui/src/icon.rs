//! Centralized icon set.
//!
//! Icons render as inline 24x24 stroke SVGs so the shell CSS can tint them with `currentColor`.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to the shell.
pub enum IconName {
    /// Folder (packing list).
    Folder,
    /// Fork and knife (food list).
    Utensils,
    /// Picture frame (photo album).
    Image,
    /// Start button glyph.
    Launcher,
    /// Signed-in user.
    User,
    /// Presentation switch.
    Monitor,
    /// Sign out.
    SignOut,
    /// Titlebar minimize.
    WindowMinimize,
    /// Titlebar maximize.
    WindowMaximize,
    /// Titlebar restore from maximized.
    WindowRestore,
    /// Close.
    Dismiss,
}

impl IconName {
    /// Stable token used in `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Utensils => "utensils",
            Self::Image => "image",
            Self::Launcher => "launcher",
            Self::User => "user",
            Self::Monitor => "monitor",
            Self::SignOut => "sign-out",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Folder => "M3 6a2 2 0 0 1 2-2h4l2 2h8a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            Self::Utensils => "M3 2v7a2 2 0 0 0 2 2h2a2 2 0 0 0 2-2V2M6 2v20M21 15V2a5 5 0 0 0-5 5v6h5zm0 0v7",
            Self::Image => "M3 5h18v14H3zM8.5 10.5a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3M21 15l-5-5L5 19",
            Self::Launcher => "M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z",
            Self::User => "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8",
            Self::Monitor => "M2 3h20v14H2zM8 21h8M12 17v4",
            Self::SignOut => "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4M16 17l5-5-5-5M21 12H9",
            Self::WindowMinimize => "M5 18h14",
            Self::WindowMaximize => "M5 5h14v14H5z",
            Self::WindowRestore => "M8 8h11v11H8zM5 16V5h11",
            Self::Dismiss => "M6 6l12 12M18 6L6 18",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 32px, used on desktop icons.
    Lg,
}

impl IconSize {
    /// Edge length in CSS pixels.
    pub const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

#[component]
/// Inline SVG icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            data-ui-icon=icon.token()
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path()></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_are_unique() {
        let all = [
            IconName::Folder,
            IconName::Utensils,
            IconName::Image,
            IconName::Launcher,
            IconName::User,
            IconName::Monitor,
            IconName::SignOut,
            IconName::WindowMinimize,
            IconName::WindowMaximize,
            IconName::WindowRestore,
            IconName::Dismiss,
        ];
        let tokens: std::collections::HashSet<_> = all.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), all.len());
    }
}
