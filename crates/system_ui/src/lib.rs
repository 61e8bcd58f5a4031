//! Shared UI primitive library for the retro desktop shell.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable `data-ui-*`
//! DOM contract consumed by the shell stylesheet.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, DesktopBackdrop, DesktopBanner, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, EmptyState, Heading, LayoutGap, MenuHeader,
    MenuItem, MenuSeparator, MenuSurface, Stack, Taskbar, TaskbarButton, TaskbarClock,
    TaskbarSection, Text, TextRole, TextTone, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for crates composing the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, DesktopBackdrop, DesktopBanner, DesktopIconButton,
        DesktopIconGrid, DesktopRoot, DesktopWindowLayer, EmptyState, Heading, Icon, IconName,
        IconSize, LayoutGap, MenuHeader, MenuItem, MenuSeparator, MenuSurface, Stack, Taskbar,
        TaskbarButton, TaskbarClock, TaskbarSection, Text, TextRole, TextTone, WindowBody,
        WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
    };
}
