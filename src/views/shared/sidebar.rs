use yew::prelude::*;

/// One dashboard section: `(id, icon, label)`
pub type SidebarItem = (&'static str, &'static str, &'static str);

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub items: &'static [SidebarItem],
    pub active: AttrValue,
    pub on_select: Callback<&'static str>,
    pub on_logout: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let on_logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {
        <aside class="sidebar bg-success text-white p-3">
            <ul class="nav flex-column">
                { for props.items.iter().map(|(id, icon, label)| {
                    let onclick = {
                        let cb = props.on_select.clone();
                        let id = *id;
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            cb.emit(id);
                        })
                    };
                    let class = classes!("nav-link", "text-white", (&*props.active == *id).then_some("active fw-bold"));
                    html! {
                        <li class="nav-item" key={*id}>
                            <a href="#" {class} {onclick}>
                                <i class={classes!(*icon, "me-2")}></i>{*label}
                            </a>
                        </li>
                    }
                }) }
                <li class="nav-item mt-3">
                    <a href="#" class="nav-link text-white" onclick={on_logout}>
                        <i class="fas fa-sign-out-alt me-2"></i>{"Logout"}
                    </a>
                </li>
            </ul>
        </aside>
    }
}
