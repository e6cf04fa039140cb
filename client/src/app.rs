//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, toast_stack::ToastStack};
use crate::pages::{
    create_donation::CreateDonationPage, donations::DonationsPage, landing::LandingPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::auth::Auth;
use crate::state::session_store::BrowserSessionStore;
use crate::state::toast::Toasts;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = Auth::new(Arc::new(BrowserSessionStore));
    provide_context(auth);
    provide_context(Toasts::new());

    // Server and first client render both stay in `Restoring`; the stored
    // session is read once hydration is done.
    Effect::new(move || auth.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/foodshare.css"/>
        <Link rel="stylesheet" href=LEAFLET_CSS/>
        <Script src=LEAFLET_JS/>
        <Title text="FoodShare"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("donations") view=DonationsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("create-donation") view=CreateDonationPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
