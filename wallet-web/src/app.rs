//! TonyWallet Web App - Leptos Frontend
//!
//! Public pages share the navbar and footer; the dashboard pages share a
//! wallet container that lives as long as the user stays inside them.

use leptos::prelude::*;
use leptos_router::{
    components::{Outlet, ParentRoute, Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::components::{Footer, Navbar, RouteErrorView};
use crate::config::AppConfig;
use crate::pages::{
    AboutPage, DashboardPage, LandingPage, NotFound, PrivacyPage, SignInPage, SignUpPage,
    TransactionDetailPage,
};
use crate::routes::find_route;
use crate::state::auth::provide_auth_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!(
        "API at {}, wallet service at {}",
        config.api_base_url,
        config.wallet_api_url
    );
    provide_context(config);
    provide_auth_context();

    view! {
        <Router>
            <TitleSync/>
            <Routes fallback=|| view! { <NotFound/> }>
                <ParentRoute path=path!("") view=PublicLayout>
                    <Route path=path!("") view=|| view! { <RouteBoundary><LandingPage/></RouteBoundary> }/>
                    <Route path=path!("about") view=|| view! { <RouteBoundary><AboutPage/></RouteBoundary> }/>
                    <Route path=path!("privacy") view=|| view! { <RouteBoundary><PrivacyPage/></RouteBoundary> }/>
                    <Route path=path!("signup") view=|| view! { <RouteBoundary><SignUpPage/></RouteBoundary> }/>
                    <Route path=path!("signin") view=|| view! { <RouteBoundary><SignInPage/></RouteBoundary> }/>
                </ParentRoute>
                <ParentRoute path=path!("dashboard") view=ProtectedLayout>
                    <Route path=path!("") view=|| view! { <RouteBoundary><DashboardPage/></RouteBoundary> }/>
                    <Route
                        path=path!("transactions/:reference")
                        view=|| view! { <RouteBoundary><TransactionDetailPage/></RouteBoundary> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Keeps the document title in step with the current route.
#[component]
fn TitleSync() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        let title = match find_route(&location.pathname.get()) {
            Some(route) => format!("{} | TonyWallet", route.title),
            None => "Page Not Found | TonyWallet".to_string(),
        };
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });
}

#[component]
fn PublicLayout() -> impl IntoView {
    view! {
        <div class="app-container">
            <Navbar/>
            <main class="page">
                <Outlet/>
            </main>
            <Footer/>
        </div>
    }
}

/// Owns the wallet container for every dashboard route; leaving the
/// dashboard detaches it.
#[component]
fn ProtectedLayout() -> impl IntoView {
    provide_wallet_context();

    view! {
        <div class="app-container">
            <Outlet/>
        </div>
    }
}

/// Per-route error boundary.
#[component]
fn RouteBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            let message = errors
                .get()
                .into_iter()
                .map(|(_, e)| e.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            view! { <RouteErrorView message=message/> }
        }>
            {children()}
        </ErrorBoundary>
    }
}
