use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArrowButtonProps {
    pub is_open: bool,
    pub on_toggle: Callback<()>,
}

/// The drawer's toggle control. Stateless; `is_open` is owned by the root.
#[function_component(ArrowButton)]
pub(crate) fn arrow_button(props: &ArrowButtonProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "Enter" | " ") {
                // Space must not scroll the page
                event.prevent_default();
                on_toggle.emit(());
            }
        })
    };
    let class = classes!(
        "arrow-button",
        props.is_open.then_some("arrow-button_open")
    );
    html! {
        <div
            role="button"
            aria-label="Открыть или закрыть форму параметров статьи"
            aria-pressed={props.is_open.to_string()}
            tabindex="0"
            {class}
            {onclick}
            {onkeydown}
        >
            <span class={classes!(
                "arrow-button__glyph",
                props.is_open.then_some("arrow-button__glyph_open")
            )}>
                { "❯" }
            </span>
        </div>
    }
}
