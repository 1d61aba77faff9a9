use article_tuner_core::{entry_by_value, ArticleParam, ArticleState, OptionEntry};
use web_sys::{Event, HtmlSelectElement, SubmitEvent};
use yew::prelude::*;

use crate::arrow_button::ArrowButton;

#[derive(Properties, PartialEq)]
pub(crate) struct ArticleParamsFormProps {
    pub is_open: bool,
    pub draft: ArticleState,
    /// Node watched by the outside-press dismissal; wraps both the arrow
    /// control and the drawer so toggling while open is a toggle, not an
    /// outside press.
    pub region_ref: NodeRef,
    pub on_change: Callback<(ArticleParam, OptionEntry)>,
    pub on_apply: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    title: AttrValue,
    param: ArticleParam,
    selected: OptionEntry,
    on_change: Callback<(ArticleParam, OptionEntry)>,
}

#[function_component(SelectField)]
fn select_field(props: &SelectFieldProps) -> Html {
    let id = format!("param-{}", props.param.name());
    let onchange = {
        let param = props.param;
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(entry) = entry_by_value(param.options(), &select.value()) {
                on_change.emit((param, entry));
            }
        })
    };
    html! {
        <div class="control">
            <label for={id.clone()}>{ props.title.clone() }</label>
            <select id={id} {onchange}>
                { for props.param.options().iter().map(|entry| html! {
                    <option
                        value={entry.value}
                        selected={entry.value == props.selected.value}
                    >
                        { entry.title }
                    </option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RadioFieldProps {
    title: AttrValue,
    param: ArticleParam,
    selected: OptionEntry,
    on_change: Callback<(ArticleParam, OptionEntry)>,
}

#[function_component(RadioField)]
fn radio_field(props: &RadioFieldProps) -> Html {
    let group = props.param.name();
    html! {
        <fieldset class="control control_radio">
            <legend>{ props.title.clone() }</legend>
            { for props.param.options().iter().map(|entry| {
                let entry = *entry;
                let onchange = {
                    let param = props.param;
                    let on_change = props.on_change.clone();
                    Callback::from(move |_: Event| on_change.emit((param, entry)))
                };
                html! {
                    <label class="radio">
                        <input
                            type="radio"
                            name={group}
                            value={entry.value}
                            checked={entry.value == props.selected.value}
                            {onchange}
                        />
                        { entry.title }
                    </label>
                }
            }) }
        </fieldset>
    }
}

/// The settings drawer: arrow control plus an always-mounted `<aside>`
/// with the five field groups and the reset/apply actions. Visibility is
/// class-driven; the closed drawer stays in the tree but is hidden from
/// assistive technology.
#[function_component(ArticleParamsForm)]
pub(crate) fn article_params_form(props: &ArticleParamsFormProps) -> Html {
    let onsubmit = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_apply.emit(());
        })
    };
    let onreset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |event: Event| {
            event.prevent_default();
            on_reset.emit(());
        })
    };
    let aside_class = classes!(
        "params-panel",
        props.is_open.then_some("params-panel_open")
    );
    html! {
        <div class="params-region" ref={props.region_ref.clone()}>
            <ArrowButton is_open={props.is_open} on_toggle={props.on_toggle.clone()} />
            <aside class={aside_class} aria-hidden={(!props.is_open).to_string()}>
                <form class="params-form" {onsubmit} {onreset}>
                    <h2 class="params-form__title">{ "Настройки статьи" }</h2>
                    <hr class="params-form__separator" />
                    <SelectField
                        title="Семейство шрифта"
                        param={ArticleParam::FontFamily}
                        selected={props.draft.font_family}
                        on_change={props.on_change.clone()}
                    />
                    <hr class="params-form__separator" />
                    <RadioField
                        title="Размер шрифта"
                        param={ArticleParam::FontSize}
                        selected={props.draft.font_size}
                        on_change={props.on_change.clone()}
                    />
                    <hr class="params-form__separator" />
                    <SelectField
                        title="Цвет шрифта"
                        param={ArticleParam::FontColor}
                        selected={props.draft.font_color}
                        on_change={props.on_change.clone()}
                    />
                    <hr class="params-form__separator" />
                    <SelectField
                        title="Цвет фона"
                        param={ArticleParam::BackgroundColor}
                        selected={props.draft.background_color}
                        on_change={props.on_change.clone()}
                    />
                    <hr class="params-form__separator" />
                    <SelectField
                        title="Ширина контента"
                        param={ArticleParam::ContentWidth}
                        selected={props.draft.content_width}
                        on_change={props.on_change.clone()}
                    />
                    <div class="params-form__actions">
                        <button type="reset" class="button button_clear">
                            { "Сбросить" }
                        </button>
                        <button type="submit" class="button button_apply">
                            { "Применить" }
                        </button>
                    </div>
                </form>
            </aside>
        </div>
    }
}
