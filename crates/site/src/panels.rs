//! Content panels registered as desktop windows.

use desktop_runtime::{RegistryError, WindowDescriptor, WindowRegistry};
use leptos::*;
use system_ui::{EmptyState, Heading, IconName, LayoutGap, Stack, Text, TextRole, TextTone};

#[component]
fn PlaceholderPanel(heading: &'static str, icon: IconName, blurb: &'static str) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Md>
            <Heading role=TextRole::Title>{heading}</Heading>
            <EmptyState icon=icon>
                <Text tone=TextTone::Secondary>{blurb}</Text>
            </EmptyState>
        </Stack>
    }
}

/// The desktop's windows, in icon order.
///
/// # Errors
///
/// Fails only if two panels share an id.
pub fn window_registry() -> Result<WindowRegistry, RegistryError> {
    WindowRegistry::new([
        WindowDescriptor::new("packing", "Packing List", IconName::Folder, || {
            view! {
                <PlaceholderPanel
                    heading="Packing List"
                    icon=IconName::Folder
                    blurb="Nothing packed yet. Items the group brings will show up here."
                />
            }
            .into_view()
        }),
        WindowDescriptor::new("food", "Food List", IconName::Utensils, || {
            view! {
                <PlaceholderPanel
                    heading="Food List"
                    icon=IconName::Utensils
                    blurb="No dishes claimed yet."
                />
            }
            .into_view()
        }),
        WindowDescriptor::new("photos", "Photo Album", IconName::Image, || {
            view! {
                <PlaceholderPanel
                    heading="Photo Album"
                    icon=IconName::Image
                    blurb="No photos shared yet."
                />
            }
            .into_view()
        }),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_lists_the_three_planner_windows() {
        let registry = window_registry().expect("registry");
        let summary: Vec<_> = registry
            .iter()
            .map(|descriptor| (descriptor.id.as_str(), descriptor.title.as_str(), descriptor.icon))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("packing", "Packing List", IconName::Folder),
                ("food", "Food List", IconName::Utensils),
                ("photos", "Photo Album", IconName::Image),
            ]
        );
    }
}
