use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth;
use crate::router::Route;
use crate::services::FarmerSignupForm;
use crate::utils::{GENDERS, LANGUAGES, REGIONS, SOIL_TYPES};
use crate::views::shared::{bind, options, Field, SelectField};

#[function_component(FarmerSignup)]
pub fn farmer_signup() -> Html {
    let auth = use_auth();
    let form = use_state(FarmerSignupForm::default);

    let on_submit = {
        let (form, signup) = (form.clone(), auth.signup_farmer.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            signup.emit((*form).clone());
        })
    };
    let genders: Vec<(AttrValue, AttrValue)> = GENDERS
        .iter()
        .map(|(value, label)| (AttrValue::Static(*value), AttrValue::Static(*label)))
        .collect();

    html! {
        <div class="container py-5">
            <div class="row justify-content-center">
                <div class="col-lg-8">
                    <div class="card shadow-sm p-4">
                        <h2 class="text-center text-success mb-4">
                            <i class="fas fa-tractor me-2"></i>{"Farmer Signup"}
                        </h2>
                        <form onsubmit={on_submit}>
                            <h5 class="mb-3">{"Personal Details"}</h5>
                            <div class="row">
                                <div class="col-md-6">
                                    <Field label="Full Name" name="name" value={form.name.clone()} oninput={bind(&form, |f, v| f.name = v)} />
                                </div>
                                <div class="col-md-3">
                                    <Field label="Age" name="age" input_type="number" value={form.age.clone()} oninput={bind(&form, |f, v| f.age = v)} />
                                </div>
                                <div class="col-md-3">
                                    <SelectField label="Gender" name="gender" value={form.gender.clone()} options={genders}
                                        onchange={bind(&form, |f, v| f.gender = v)} />
                                </div>
                                <div class="col-md-6">
                                    <Field label="Phone" name="phone" input_type="tel" value={form.phone.clone()} oninput={bind(&form, |f, v| f.phone = v)} />
                                </div>
                                <div class="col-md-6">
                                    <Field label="Email" name="email" input_type="email" value={form.email.clone()} oninput={bind(&form, |f, v| f.email = v)} />
                                </div>
                                <div class="col-md-6">
                                    <Field label="Password" name="password" input_type="password" value={form.password.clone()}
                                        oninput={bind(&form, |f, v| f.password = v)} />
                                </div>
                                <div class="col-md-6">
                                    <Field label="Confirm Password" name="confirmPassword" input_type="password" value={form.confirm_password.clone()}
                                        oninput={bind(&form, |f, v| f.confirm_password = v)} />
                                </div>
                            </div>

                            <h5 class="mb-3 mt-2">{"Farm Details"}</h5>
                            <div class="row">
                                <div class="col-md-6">
                                    <SelectField label="Region" name="region" value={form.region.clone()} options={options(&REGIONS)}
                                        onchange={bind(&form, |f, v| f.region = v)} />
                                </div>
                                <div class="col-md-6">
                                    <Field label="Address" name="address" value={form.address.clone()} oninput={bind(&form, |f, v| f.address = v)} />
                                </div>
                                <div class="col-md-4">
                                    <Field label="Land (acres)" name="acres" input_type="number" value={form.acres.clone()}
                                        oninput={bind(&form, |f, v| f.acres = v)} />
                                </div>
                                <div class="col-md-4">
                                    <Field label="Cultivation Start" name="cultivationStartDate" input_type="date" value={form.cultivation_start_date.clone()}
                                        oninput={bind(&form, |f, v| f.cultivation_start_date = v)} />
                                </div>
                                <div class="col-md-4">
                                    <SelectField label="Preferred Language" name="preferredLanguage" value={form.preferred_language.clone()}
                                        options={options(&LANGUAGES)} onchange={bind(&form, |f, v| f.preferred_language = v)} />
                                </div>
                                <div class="col-md-4">
                                    <SelectField label="Soil Type" name="soilType" value={form.soil_type.clone()}
                                        options={options(&SOIL_TYPES)} onchange={bind(&form, |f, v| f.soil_type = v)} />
                                </div>
                            </div>

                            <button type="submit" class="btn btn-success btn-lg w-100 mt-3" disabled={auth.busy}>{"Create Account"}</button>
                        </form>
                        <p class="text-center mt-3 mb-0">
                            {"Already registered? "}
                            <Link<Route> to={Route::FarmerLogin}>{"Login"}</Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
