//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::{nav_links, DASHBOARD, HOME, SIGN_IN, SIGN_UP};
use crate::state::auth::use_auth_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth_context();
    let state = *auth.state();
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = signal(false);

    let on_logout = move |_| {
        auth.logout();
        set_menu_open.set(false);
        navigate(HOME, Default::default());
    };

    let links = nav_links()
        .map(|route| {
            view! {
                <A href=route.path attr:class="nav-link">
                    {route.title}
                </A>
            }
        })
        .collect_view();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href=HOME attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="brand-accent">"Tony"</span><span class="brand-white">"Wallet"</span>
                    </span>
                </A>

                <div class="nav-links">{links}</div>

                {move || {
                    let logout = on_logout.clone();
                    match state.with(|s| s.user.as_ref().map(|u| (u.initials(), u.display_name()))) {
                        Some((initials, name)) => view! {
                            <div class="nav-user">
                                <button class="nav-avatar" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                                    <span class="avatar-circle">{initials}</span>
                                    <span>{name}</span>
                                </button>
                                {move || {
                                    let logout = logout.clone();
                                    menu_open.get().then(move || view! {
                                        <div class="nav-dropdown">
                                            <A href=DASHBOARD attr:class="nav-dropdown-item">"Wallet"</A>
                                            <button class="nav-dropdown-item danger" on:click=logout>
                                                "Logout"
                                            </button>
                                        </div>
                                    })
                                }}
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <div class="nav-user">
                                <A href=SIGN_IN attr:class="nav-link">"Login"</A>
                                <A href=SIGN_UP attr:class="btn btn-small">"Join"</A>
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </nav>
    }
}
