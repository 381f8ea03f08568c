use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Search box with debounce and a clear button.
///
/// The filter recomputes on every settled keystroke; the 300 ms debounce
/// only batches bursts of typing, it does not impose a minimum length.
#[component]
pub fn SearchInput(
    /// Current committed filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input, ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());

    // Pending timeout handle plus its closure; holding the closure here lets
    // the next keystroke drop it instead of leaking it via `forget`.
    let debounce = StoredValue::new_local(None::<(i32, Closure<dyn Fn()>)>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        debounce.update_value(|pending| {
            if let Some((timeout_id, _)) = pending.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_timeout_with_handle(timeout_id);
                }
            }
        });

        let window = web_sys::window().expect("no window");
        let closure = Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                300,
            )
            .expect("setTimeout failed");

        debounce.set_value(Some((timeout_id, closure)));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                class="form__input form__input--search"
                class:form__input--active=is_filter_active
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="form__input-clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
