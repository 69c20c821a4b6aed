//! Todo-UI App
//!
//! The sole component: header, item list, text input, add button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::model::TodoModel;
use crate::styles;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (model, set_model) = signal(TodoModel::default());

    let on_add = move |_| {
        set_model.update(|m| m.add());
        web_sys::console::log_1(&format!("[TODO] {} items", model.with(|m| m.count())).into());
    };

    view! {
        <div class=styles::CONTAINER>
            <h2 class=styles::HEADER>"TODO"</h2>
            <ul>
                {move || model.with(|m| {
                    m.todos.iter().map(|t| {
                        view! { <li class=styles::TODO_ITEM>{t.clone()}</li> }
                    }).collect_view()
                })}
            </ul>
            <div>
                <input
                    type="text"
                    class=styles::INPUT
                    placeholder="What needs to be done?"
                    prop:value=move || model.with(|m| m.input.clone())
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_model.update(|m| m.set_input(input.value()));
                    }
                />
                <button class=styles::BUTTON on:click=on_add>
                    // Count before the pending add: "Add #0" while the list is empty
                    "Add #" {move || model.with(|m| m.count())}
                </button>
            </div>
        </div>
    }
}
