use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host::{HostServices, PresentationMode, PresentationService};
use system_ui::{Button, EmptyState, Heading, IconName, Stack, Text, TextRole, TextTone};

use crate::{panels::window_registry, session_gate::SessionGate};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let host_services = platform_host_web::build_host_services();
    logging::log!(
        "group planner host strategy: {}",
        host_services.host_strategy.as_str()
    );

    view! {
        <Title text="Gochuconagram" />
        <Meta name="description" content="Group planning for the next Gochucon, on a retro desktop." />

        <main class="site-root">
            <SessionGate host_services=host_services />
        </main>
    }
}

#[component]
pub(crate) fn SignedInView(host_services: HostServices) -> impl IntoView {
    match host_services.presentation.current() {
        PresentationMode::Classic => view! { <DesktopEntry host_services=host_services /> }.into_view(),
        PresentationMode::Modern => {
            view! { <ModernPlaceholder host_services=host_services /> }.into_view()
        }
    }
}

#[component]
pub fn DesktopEntry(host_services: HostServices) -> impl IntoView {
    match window_registry() {
        Ok(registry) => view! {
            <DesktopProvider host_services=host_services registry=registry>
                <DesktopShell />
            </DesktopProvider>
        }
        .into_view(),
        Err(err) => {
            logging::warn!("desktop windows could not be registered: {err}");
            view! {
                <EmptyState icon=IconName::Dismiss>
                    <Text tone=TextTone::Danger>"The desktop could not be loaded."</Text>
                </EmptyState>
            }
            .into_view()
        }
    }
}

#[component]
/// Stand-in for the modern layout, with a way back to the desktop.
pub fn ModernPlaceholder(host_services: HostServices) -> impl IntoView {
    let presentation = host_services.presentation.clone();
    let back = Callback::new(move |_| {
        let presentation = presentation.clone();
        spawn_local(async move {
            if let Err(err) = presentation.switch_to(PresentationMode::Classic).await {
                logging::warn!("presentation switch failed: {err}");
            }
        });
    });

    view! {
        <section class="modern-placeholder" data-ui-slot="modern">
            <Stack>
                <Heading role=TextRole::Title>"Gochuconagram"</Heading>
                <Text tone=TextTone::Secondary>"The modern experience is on its way."</Text>
                <Button leading_icon=IconName::Monitor on_click=back>
                    {PresentationMode::Modern.switch_label()}
                </Button>
            </Stack>
        </section>
    }
}
