// ============================================================================
// PAGES - Public marketing pages
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::{use_assistant, use_toast};
use crate::hooks::use_auth;
use crate::models::ToastKind;
use crate::router::Route;
use crate::utils::{APP_NAME, APP_TAGLINE};
use crate::views::shared::{bind, Field, TextArea};

fn feature(icon: &'static str, title: &'static str, text: &'static str) -> Html {
    html! {
        <div class="col-md-4">
            <div class="card h-100 p-4 text-center shadow-sm">
                <i class={classes!(icon, "fa-3x", "text-success", "mb-3")}></i>
                <h4>{title}</h4>
                <p class="text-muted mb-0">{text}</p>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_auth();
    let cta = match &auth.user {
        Some(user) => html! {
            <Link<Route> classes={classes!("btn", "btn-light", "btn-lg", "me-3")} to={Route::dashboard_for(user.role)}>
                {format!("Go to {} Dashboard", user.role.label())}
            </Link<Route>>
        },
        None => html! {
            <Link<Route> classes={classes!("btn", "btn-light", "btn-lg", "me-3")} to={Route::LoginSelection}>{"Get Started"}</Link<Route>>
        },
    };

    html! {
        <>
            <section class="hero bg-success text-white py-5">
                <div class="container py-5 text-center">
                    <h1 class="display-4 fw-bold">{APP_NAME}</h1>
                    <p class="lead">{APP_TAGLINE}</p>
                    {cta}
                    <Link<Route> classes={classes!("btn", "btn-outline-light", "btn-lg")} to={Route::About}>{"Learn More"}</Link<Route>>
                </div>
            </section>
            <section class="container py-5">
                <div class="row g-4">
                    {feature("fas fa-seedling", "Smart Farming", "Advanced agricultural techniques and technology for better crop yields.")}
                    {feature("fas fa-chart-line", "Market Analytics", "Real-time market data and price predictions for better decision making.")}
                    {feature("fas fa-headset", "Expert Support", "Direct access to agricultural experts and technical support.")}
                </div>
            </section>
        </>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="container py-5">
            <h1 class="text-center mb-5">{format!("About {}", APP_NAME)}</h1>
            <div class="row g-4 mb-5">
                <div class="col-md-4"><h4>{"Our Mission"}</h4><p class="text-muted">{"Connect every farmer with the agents, data and markets they need."}</p></div>
                <div class="col-md-4"><h4>{"Our Team"}</h4><p class="text-muted">{"Field agents and agronomists working region by region."}</p></div>
                <div class="col-md-4"><h4>{"Our Reach"}</h4><p class="text-muted">{"Four regions served through local agent networks."}</p></div>
            </div>
            <h3 class="text-center mb-4">{"Our Values"}</h3>
            <div class="row g-4">
                {feature("fas fa-heart", "Empathy", "Understanding farmer needs and challenges")}
                {feature("fas fa-lightbulb", "Innovation", "Continuous improvement and modern solutions")}
                {feature("fas fa-handshake", "Trust", "Building lasting relationships with farmers")}
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let assistant = use_assistant();
    let on_insights = Callback::from(move |_: MouseEvent| {
        if let Some(assistant) = &assistant {
            assistant.open_with_insights();
        }
    });

    html! {
        <div class="container py-5">
            <h1 class="text-center mb-2">{"Comprehensive Farming Services"}</h1>
            <p class="text-center text-muted mb-5">{"Support, data and digital tools from sowing to sale"}</p>
            <div class="row g-4 mb-5">
                {feature("fas fa-cloud-sun", "Weather Alerts", "Real-time updates on rainfall, humidity, wind and UV index.")}
                {feature("fas fa-rupee-sign", "Market Prices", "Live mandi prices for the crops you grow.")}
                {feature("fas fa-brain", "AI Insights", "Smart predictions for yield, pests and prices.")}
            </div>
            <div class="text-center mb-5">
                <button class="btn btn-outline-success" onclick={on_insights}>
                    <i class="fas fa-robot me-2"></i>{"Ask the AI Assistant"}
                </button>
            </div>
            <div class="text-center">
                <h3>{"Ready to Transform Your Farming?"}</h3>
                <Link<Route> classes={classes!("btn", "btn-success", "btn-lg", "mt-3")} to={Route::FarmerSignup}>{"Join as a Farmer"}</Link<Route>>
            </div>
        </div>
    }
}

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
}

const OFFICES: [(&str, &str, &str); 3] = [
    ("North Region", "Delhi, Punjab, Haryana", "+91 98765 43211"),
    ("South Region", "Karnataka, Tamil Nadu, Kerala", "+91 98765 43212"),
    ("East Region", "West Bengal, Bihar, Odisha", "+91 98765 43213"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let toasts = use_toast();
    let form = use_state(ContactForm::default);

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.name.trim().is_empty() || form.message.trim().is_empty() {
                toasts.show("Please enter your name and a message.", ToastKind::Warning);
                return;
            }
            log::info!("✉️ [CONTACT] Message from {}", form.email);
            toasts.show("Thank you! We will get back to you soon.", ToastKind::Success);
            form.set(ContactForm::default());
        })
    };

    html! {
        <div class="container py-5">
            <h1 class="text-center mb-5">{"Contact Us"}</h1>
            <div class="row g-4">
                <div class="col-md-6">
                    <div class="card p-4 shadow-sm">
                        <h4 class="text-success mb-4">{"Quick Contact"}</h4>
                        <form onsubmit={on_submit}>
                            <Field label="Name" name="name" value={form.name.clone()} oninput={bind(&form, |f, v| f.name = v)} />
                            <Field label="Email" name="email" input_type="email" value={form.email.clone()} oninput={bind(&form, |f, v| f.email = v)} />
                            <TextArea label="Message" name="message" value={form.message.clone()} oninput={bind(&form, |f, v| f.message = v)} />
                            <button type="submit" class="btn btn-success">{"Send Message"}</button>
                        </form>
                    </div>
                </div>
                <div class="col-md-6">
                    <div class="card p-4 shadow-sm mb-4">
                        <h4 class="text-success mb-3">{"Get in Touch"}</h4>
                        <p class="mb-0">{"Mon - Fri: 9:00 AM - 6:00 PM"}</p>
                    </div>
                    <div class="card p-4 shadow-sm">
                        <h4 class="text-success mb-3">{"Regional Offices"}</h4>
                        { for OFFICES.iter().map(|(region, states, phone)| html! {
                            <div class="mb-3">
                                <h6 class="mb-0">{*region}</h6>
                                <small class="text-muted d-block">{*states}</small>
                                <small>{format!("Phone: {}", phone)}</small>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container py-5 text-center">
            <h1 class="display-1 text-success">{"404"}</h1>
            <p class="lead">{"The page you are looking for does not exist."}</p>
            <Link<Route> classes={classes!("btn", "btn-success")} to={Route::Home}>{"Back to Home"}</Link<Route>>
        </div>
    }
}
