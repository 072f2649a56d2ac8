use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub icon: AttrValue,
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="col-md-3">
            <div class="card text-center p-3 shadow-sm h-100" style="cursor: pointer;" onclick={props.onclick.clone()}>
                <i class={classes!(props.icon.to_string(), "fa-2x", "mb-2")}></i>
                <div class="fw-bold fs-4">{props.value.clone()}</div>
                <div class="text-muted">{props.label.clone()}</div>
            </div>
        </div>
    }
}
