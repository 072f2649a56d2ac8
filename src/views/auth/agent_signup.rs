use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::router::Route;
use crate::services::AgentSignupForm;
use crate::utils::REGIONS;
use crate::views::shared::{bind, options, Field, SelectField};

#[function_component(AgentSignup)]
pub fn agent_signup() -> Html {
    let auth = use_auth();
    let form = use_state(AgentSignupForm::default);

    let on_submit = {
        let (form, signup) = (form.clone(), auth.signup_agent.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            signup.emit((*form).clone());
        })
    };

    html! {
        <div class="container py-5">
            <div class="row justify-content-center">
                <div class="col-lg-6">
                    <div class="card shadow-sm p-4">
                        <h2 class="text-center text-success mb-4">
                            <i class="fas fa-user-tie me-2"></i>{"Agent Signup"}
                        </h2>
                        <form onsubmit={on_submit}>
                            <Field label="Full Name" name="name" value={form.name.clone()} oninput={bind(&form, |f, v| f.name = v)} />
                            <Field label="Email" name="email" input_type="email" value={form.email.clone()} oninput={bind(&form, |f, v| f.email = v)} />
                            <Field label="Phone" name="phone" input_type="tel" value={form.phone.clone()} oninput={bind(&form, |f, v| f.phone = v)} />
                            <Field label="Password" name="password" input_type="password" value={form.password.clone()}
                                oninput={bind(&form, |f, v| f.password = v)} />
                            <Field label="Confirm Password" name="confirm" input_type="password" value={form.confirm_password.clone()}
                                oninput={bind(&form, |f, v| f.confirm_password = v)} />
                            <SelectField label="Region" name="region" value={form.region.clone()} options={options(&REGIONS)}
                                onchange={bind(&form, |f, v| f.region = v)} />
                            <button type="submit" class="btn btn-success btn-lg w-100 mt-2" disabled={auth.busy}>{"Create Account"}</button>
                        </form>
                        <p class="text-center mt-3 mb-0">
                            {"Already registered? "}
                            <Link<Route> to={Route::AgentLogin}>{"Login"}</Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
