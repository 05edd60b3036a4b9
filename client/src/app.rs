//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::components::toasts::Toasts;
use crate::net::api::HttpAuthBackend;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminPage, courses::CoursesPage, dashboard::DashboardPage, home::HomePage, instructor::InstructorPage,
    login::LoginPage, oauth_callback::OAuthCallbackPage, register::RegisterPage, unauthorized::UnauthorizedPage,
};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::browser::WindowBrowser;
use crate::util::dark_mode;

/// The session store as wired in the running app.
pub type AppSession = Session<RwSignal<AuthState>, HttpAuthBackend, WindowBrowser>;

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
/// Provides shared state and the session store, starts session restore and
/// the background timers, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::booting());
    let notices = RwSignal::new(NoticeState::default());
    let ui = RwSignal::new(UiState::default());
    let session: AppSession = Session::new(auth, HttpAuthBackend, WindowBrowser::new(notices));

    provide_context(auth);
    provide_context(notices);
    provide_context(ui);
    provide_context(session.clone());

    // The server always renders the light theme; pick up the stored
    // preference once hydrated.
    Effect::new(move || ui.set(UiState::with_dark_mode(dark_mode::read_preference())));

    #[cfg(feature = "hydrate")]
    crate::util::session_timers::install(session);
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/lms.css"/>
        <Title text="LMS"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <section class="status-page"><h1>"Page not found."</h1></section> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=(StaticSegment("oauth"), StaticSegment("callback")) view=OAuthCallbackPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RouteGuard><DashboardPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("courses")
                        view=|| view! { <RouteGuard><CoursesPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("instructor")
                        view=|| view! { <RouteGuard role=Role::Instructor><InstructorPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RouteGuard role=Role::Admin><AdminPage/></RouteGuard> }
                    />
                </Routes>
            </main>
            <Toasts/>
        </Router>
    }
}
