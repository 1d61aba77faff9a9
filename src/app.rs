use std::rc::Rc;

use article_tuner_core::{ArticleParam, OptionEntry, Tuner};
use yew::prelude::*;

use crate::article::Article;
use crate::dismiss::use_close_on_outside_or_esc;
use crate::params_form::ArticleParamsForm;

pub(crate) enum TunerAction {
    Toggle,
    Change(ArticleParam, OptionEntry),
    Apply,
    Reset,
    Dismiss,
}

/// Reducer store around the core state machine. Dispatch always acts on
/// the current value, so callbacks captured by long-lived listeners never
/// see a stale snapshot.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct TunerStore(pub(crate) Tuner);

impl Reducible for TunerStore {
    type Action = TunerAction;

    fn reduce(self: Rc<Self>, action: TunerAction) -> Rc<Self> {
        let current = self.0;
        let next = match action {
            TunerAction::Toggle => current.toggle(),
            TunerAction::Change(param, entry) => current.change(param, entry),
            TunerAction::Apply => current.apply(),
            TunerAction::Reset => current.reset(),
            TunerAction::Dismiss => current.dismiss(),
        };
        if next.is_open() != current.is_open() {
            gloo::console::log!("panel", if next.is_open() { "open" } else { "closed" });
        }
        Rc::new(TunerStore(next))
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let store = use_reducer(|| TunerStore(Tuner::new()));
    let region_ref = use_node_ref();
    let tuner = store.0;

    let on_toggle = {
        let store = store.dispatcher();
        Callback::from(move |_| store.dispatch(TunerAction::Toggle))
    };
    let on_change = {
        let store = store.dispatcher();
        Callback::from(move |(param, entry): (ArticleParam, OptionEntry)| {
            store.dispatch(TunerAction::Change(param, entry));
        })
    };
    let on_apply = {
        let store = store.dispatcher();
        Callback::from(move |_| store.dispatch(TunerAction::Apply))
    };
    let on_reset = {
        let store = store.dispatcher();
        Callback::from(move |_| store.dispatch(TunerAction::Reset))
    };
    let on_dismiss = {
        let store = store.dispatcher();
        Callback::from(move |_| store.dispatch(TunerAction::Dismiss))
    };

    use_close_on_outside_or_esc(tuner.is_open(), region_ref.clone(), on_dismiss);

    // Only the applied settings reach the page; the draft stays in the form.
    html! {
        <main class="page" style={tuner.applied().inline_style()}>
            <ArticleParamsForm
                is_open={tuner.is_open()}
                draft={tuner.draft()}
                region_ref={region_ref}
                on_change={on_change}
                on_apply={on_apply}
                on_reset={on_reset}
                on_toggle={on_toggle}
            />
            <Article />
        </main>
    }
}

/// Mounts the app on an explicitly provided root element. Tests use this
/// directly; `run_app` resolves the root from the host page.
pub(crate) fn mount(root: web_sys::Element) -> yew::AppHandle<App> {
    yew::Renderer::<App>::with_root(root).render()
}

pub(crate) fn run_app() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(root) = document.get_element_by_id("app-root") else {
        return;
    };
    let _handle = mount(root);
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{
        Document, Element, Event, EventInit, EventTarget, HtmlElement, HtmlInputElement,
        HtmlSelectElement, KeyboardEvent, KeyboardEventInit, PointerEvent, PointerEventInit,
    };

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window()
            .expect("window available")
            .document()
            .expect("document available")
    }

    struct Harness {
        root: Element,
        handle: yew::AppHandle<App>,
    }

    impl Harness {
        fn mount() -> Self {
            set_panic_hook();
            let document = document();
            let root = document.create_element("div").expect("create test root");
            document
                .body()
                .expect("body available")
                .append_child(&root)
                .expect("append test root");
            let handle = mount(root.clone());
            Self { root, handle }
        }

        fn query(&self, selector: &str) -> Element {
            self.root
                .query_selector(selector)
                .expect("query selector")
                .unwrap_or_else(|| panic!("element {selector} not found"))
        }

        fn arrow(&self) -> HtmlElement {
            self.query(".arrow-button").unchecked_into()
        }

        fn aside(&self) -> Element {
            self.query(".params-panel")
        }

        fn is_open(&self) -> bool {
            self.aside().class_list().contains("params-panel_open")
        }

        fn page_style(&self) -> String {
            self.query("main").get_attribute("style").unwrap_or_default()
        }

        fn font_size_radio(&self, value: &str) -> HtmlInputElement {
            self.query(&format!("input[name='font-size'][value='{value}']"))
                .unchecked_into()
        }

        fn teardown(self) {
            self.handle.destroy();
            self.root.remove();
        }
    }

    async fn settle() {
        TimeoutFuture::new(20).await;
    }

    fn pointer_down(target: &EventTarget) {
        let init = PointerEventInit::new();
        init.set_bubbles(true);
        let event = PointerEvent::new_with_event_init_dict("pointerdown", &init)
            .expect("pointerdown event");
        target.dispatch_event(&event).expect("dispatch pointerdown");
    }

    /// Returns false when a listener called `prevent_default`.
    fn key_down(target: &EventTarget, key: &str) -> bool {
        let init = KeyboardEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keydown event");
        target.dispatch_event(&event).expect("dispatch keydown")
    }

    fn change_event() -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        Event::new_with_event_init_dict("change", &init).expect("change event")
    }

    fn choose_radio(harness: &Harness, value: &str) {
        let input = harness.font_size_radio(value);
        input.set_checked(true);
        input
            .dispatch_event(&change_event())
            .expect("dispatch change");
    }

    fn choose_select(harness: &Harness, id: &str, value: &str) {
        let select: HtmlSelectElement = harness.query(id).unchecked_into();
        select.set_value(value);
        select
            .dispatch_event(&change_event())
            .expect("dispatch change");
    }

    #[wasm_bindgen_test(async)]
    async fn arrow_toggles_open_state_and_aria() {
        let harness = Harness::mount();
        settle().await;

        assert!(!harness.is_open());
        assert_eq!(
            harness.aside().get_attribute("aria-hidden").as_deref(),
            Some("true")
        );
        assert_eq!(
            harness.arrow().get_attribute("aria-pressed").as_deref(),
            Some("false")
        );

        harness.arrow().click();
        settle().await;
        assert!(harness.is_open());
        assert_eq!(
            harness.aside().get_attribute("aria-hidden").as_deref(),
            Some("false")
        );
        assert_eq!(
            harness.arrow().get_attribute("aria-pressed").as_deref(),
            Some("true")
        );

        harness.arrow().click();
        settle().await;
        assert!(!harness.is_open());
        harness.teardown();
    }

    #[wasm_bindgen_test(async)]
    async fn space_on_arrow_toggles_and_suppresses_scroll() {
        let harness = Harness::mount();
        settle().await;

        let default_allowed = key_down(&harness.arrow(), " ");
        settle().await;
        assert!(!default_allowed, "Space activation must prevent default");
        assert!(harness.is_open());

        let default_allowed = key_down(&harness.arrow(), "Enter");
        settle().await;
        assert!(!default_allowed);
        assert!(!harness.is_open());
        harness.teardown();
    }

    #[wasm_bindgen_test(async)]
    async fn outside_press_closes_but_inside_press_does_not() {
        let harness = Harness::mount();
        settle().await;
        harness.arrow().click();
        settle().await;
        assert!(harness.is_open());

        pointer_down(&harness.query("#param-font-family"));
        settle().await;
        assert!(harness.is_open(), "press inside the drawer must not close it");

        pointer_down(&harness.query(".article"));
        settle().await;
        assert!(!harness.is_open(), "press outside the drawer must close it");
        harness.teardown();
    }

    #[wasm_bindgen_test(async)]
    async fn escape_closes_regardless_of_target() {
        let harness = Harness::mount();
        settle().await;
        harness.arrow().click();
        settle().await;

        // dispatched from inside the drawer, still closes
        key_down(&harness.aside(), "Escape");
        settle().await;
        assert!(!harness.is_open());
        harness.teardown();
    }

    #[wasm_bindgen_test(async)]
    async fn closed_drawer_ignores_outside_events_across_cycles() {
        let harness = Harness::mount();
        settle().await;

        for _ in 0..3 {
            harness.arrow().click();
            settle().await;
            harness.arrow().click();
            settle().await;
        }
        assert!(!harness.is_open());

        let body = document().body().expect("body available");
        pointer_down(&body);
        key_down(&document(), "Escape");
        settle().await;
        assert!(!harness.is_open());

        // listeners from earlier cycles must be gone: the drawer still
        // opens and an inside press still keeps it open
        harness.arrow().click();
        settle().await;
        assert!(harness.is_open());
        pointer_down(&harness.aside());
        settle().await;
        assert!(harness.is_open());
        harness.teardown();
    }

    #[wasm_bindgen_test(async)]
    async fn apply_projects_the_draft_into_page_style() {
        let harness = Harness::mount();
        settle().await;
        assert!(harness.page_style().contains("--font-size: 18px;"));

        harness.arrow().click();
        settle().await;
        choose_radio(&harness, "24px");
        settle().await;
        // the draft edit alone must not restyle the page
        assert!(harness.page_style().contains("--font-size: 18px;"));

        let apply: HtmlElement = harness.query(".button_apply").unchecked_into();
        apply.click();
        settle().await;
        assert!(!harness.is_open());
        assert!(harness.page_style().contains("--font-size: 24px;"));
        harness.teardown();
    }

    #[wasm_bindgen_test(async)]
    async fn escape_discards_nothing_but_reopen_reseeds_the_form() {
        let harness = Harness::mount();
        settle().await;
        let before = harness.page_style();

        harness.arrow().click();
        settle().await;
        choose_radio(&harness, "38px");
        choose_select(&harness, "#param-font-color", "#FD24AF");
        choose_select(&harness, "#param-content-width", "948px");
        settle().await;

        key_down(&document(), "Escape");
        settle().await;
        assert!(!harness.is_open());
        assert_eq!(harness.page_style(), before);

        harness.arrow().click();
        settle().await;
        assert!(harness.font_size_radio("18px").checked());
        assert!(!harness.font_size_radio("38px").checked());
        harness.teardown();
    }

    #[wasm_bindgen_test(async)]
    async fn reset_restores_defaults_and_closes() {
        let harness = Harness::mount();
        settle().await;

        harness.arrow().click();
        settle().await;
        choose_radio(&harness, "24px");
        settle().await;
        let apply: HtmlElement = harness.query(".button_apply").unchecked_into();
        apply.click();
        settle().await;
        assert!(harness.page_style().contains("--font-size: 24px;"));

        harness.arrow().click();
        settle().await;
        let reset: HtmlElement = harness.query(".button_clear").unchecked_into();
        reset.click();
        settle().await;

        assert!(!harness.is_open());
        assert!(harness.page_style().contains("--font-size: 18px;"));
        assert!(harness.page_style().contains("--bg-color: #FFFFFF;"));

        harness.arrow().click();
        settle().await;
        assert!(harness.font_size_radio("18px").checked());
        harness.teardown();
    }
}
