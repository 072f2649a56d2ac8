use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Callback that writes an input's text into one field of a form state
pub fn bind<F>(form: &UseStateHandle<F>, set: fn(&mut F, String)) -> Callback<String>
where
    F: Clone + 'static,
{
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        set(&mut next, value);
        form.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(true)]
    pub required: bool,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    html! {
        <div class="mb-3">
            <label class="form-label" for={props.name.clone()}>{props.label.clone()}</label>
            <input
                class="form-control"
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                required={props.required}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs
    pub options: Vec<(AttrValue, AttrValue)>,
    pub onchange: Callback<String>,
    #[prop_or(AttrValue::Static("Select..."))]
    pub placeholder: AttrValue,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    html! {
        <div class="mb-3">
            <label class="form-label" for={props.name.clone()}>{props.label.clone()}</label>
            <select class="form-select" id={props.name.clone()} name={props.name.clone()} required=true {onchange}>
                <option value="" selected={props.value.is_empty()}>{props.placeholder.clone()}</option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{label.clone()}</option>
                }) }
            </select>
        </div>
    }
}

/// Same value and label for every entry
pub fn options(values: &[&'static str]) -> Vec<(AttrValue, AttrValue)> {
    values
        .iter()
        .copied()
        .map(|v| (AttrValue::Static(v), AttrValue::Static(v)))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<String>,
    #[prop_or(3)]
    pub rows: u32,
}

#[function_component(TextArea)]
pub fn text_area(props: &TextAreaProps) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            cb.emit(area.value());
        })
    };

    html! {
        <div class="mb-3">
            <label class="form-label" for={props.name.clone()}>{props.label.clone()}</label>
            <textarea
                class="form-control"
                id={props.name.clone()}
                name={props.name.clone()}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                {oninput}
            />
        </div>
    }
}
