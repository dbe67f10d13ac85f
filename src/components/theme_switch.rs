use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeSwitchProps {
    pub id: AttrValue,
    pub dark: bool,
    pub on_toggle: Callback<()>,
}

/// Checkbox styled as a sliding switch. The desktop and mobile instances both
/// render from the same app-owned flag, so they can never disagree.
#[function_component(ThemeSwitch)]
pub fn theme_switch(props: &ThemeSwitchProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: Event| on_toggle.emit(()))
    };

    html! {
        <label class="switch" title="Toggle dark mode">
            <input type="checkbox" id={props.id.clone()} checked={props.dark} {onchange} />
            <span class="slider round"></span>
        </label>
    }
}
