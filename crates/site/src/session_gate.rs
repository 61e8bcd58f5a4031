//! Shows the desktop to signed-in users and a welcome screen to everyone else.

use std::rc::Rc;

use leptos::*;
use platform_host::{HostServices, SessionService, SessionUser};
use system_ui::{Button, ButtonVariant, Heading, IconName, Stack, Text, TextRole, TextTone};

use crate::web_app::SignedInView;

#[component]
pub fn SessionGate(host_services: HostServices) -> impl IntoView {
    let session = host_services.session.clone();
    let user = create_rw_signal(session.current_user());

    let watch = session.watch(Rc::new(move |next: Option<SessionUser>| {
        if user.get_untracked() != next {
            user.set(next);
        }
    }));
    on_cleanup(move || watch.cancel());

    let services = store_value(host_services);

    view! {
        <Show
            when=move || user.with(Option::is_some)
            fallback=move || view! { <WelcomeScreen session=session.clone() /> }
        >
            <SignedInView host_services=services.get_value() />
        </Show>
    }
}

#[component]
fn WelcomeScreen(session: Rc<dyn SessionService>) -> impl IntoView {
    let signing_in = create_rw_signal(false);
    let sign_in = Callback::new(move |_| {
        if signing_in.get_untracked() {
            return;
        }
        signing_in.set(true);
        let session = session.clone();
        spawn_local(async move {
            if let Err(err) = session.sign_in().await {
                logging::warn!("sign-in failed: {err}");
            }
            signing_in.set(false);
        });
    });

    view! {
        <section class="welcome-screen" data-ui-slot="welcome">
            <Stack>
                <Heading role=TextRole::Display>"GOCHUCONAGRAM"</Heading>
                <Text tone=TextTone::Secondary>"Sign in to start planning with your group."</Text>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::User
                    disabled=Signal::derive(move || signing_in.get())
                    on_click=sign_in
                >
                    "Sign in"
                </Button>
            </Stack>
        </section>
    }
}
