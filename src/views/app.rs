// ============================================================================
// APP - Providers, navbar, the route switch and the assistant
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{AssistantProvider, SessionProvider, ToastProvider};
use crate::models::Role;
use crate::router::Route;
use crate::views::auth::{AgentSignup, FarmerSignup, LoginSelection, LoginView};
use crate::views::dashboards::{AdminDashboard, AgentDashboard, FarmerDashboard};
use crate::views::message::Message;
use crate::views::pages::{About, Contact, Home, NotFound, Services};
use crate::views::profile::Profile;
use crate::views::settings::Settings;
use crate::views::shared::{AiChatbot, Navbar, RequireAuth, ToastContainer};

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::Services => html! { <Services /> },
        Route::Settings => html! { <Settings /> },
        Route::LoginSelection => html! { <LoginSelection /> },
        Route::FarmerLogin => html! { <LoginView role={Role::Farmer} /> },
        Route::AgentLogin => html! { <LoginView role={Role::Agent} /> },
        Route::AdminLogin => html! { <LoginView role={Role::Admin} /> },
        Route::FarmerSignup => html! { <FarmerSignup /> },
        Route::AgentSignup => html! { <AgentSignup /> },
        Route::Profile => html! { <RequireAuth><Profile /></RequireAuth> },
        Route::FarmerDashboard => html! { <RequireAuth role={Role::Farmer}><FarmerDashboard /></RequireAuth> },
        Route::AgentDashboard => html! { <RequireAuth role={Role::Agent}><AgentDashboard /></RequireAuth> },
        Route::AdminDashboard => html! { <RequireAuth role={Role::Admin}><AdminDashboard /></RequireAuth> },
        Route::Message => html! { <RequireAuth role={Role::Farmer}><Message /></RequireAuth> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let route = use_route::<Route>();
    if route.is_some_and(|r| r.is_app_view()) {
        return html! {};
    }
    html! {
        <footer class="bg-dark text-white-50 py-4 mt-5">
            <div class="container text-center small">
                {format!("© {} AgriConnect. All rights reserved.", chrono::Local::now().format("%Y"))}
            </div>
        </footer>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <ToastProvider>
                    <AssistantProvider>
                        <Navbar />
                        <Switch<Route> render={switch} />
                        <Footer />
                        <ToastContainer />
                        <AiChatbot />
                    </AssistantProvider>
                </ToastProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}
