//! Roommate Modal Component
//!
//! Add-roommate form in a modal. Closed by the close/cancel buttons or a
//! click on the backdrop. A rejected create shows the server's message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_view::{actions, RoommateForm};

use crate::context::use_app_context;
use crate::notify;
use crate::store::{store_replace_roommates, DashboardStateStoreFields};

#[component]
pub fn RoommateModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (form, set_form) = signal(RoommateForm::default());
    let close = move || store.roommate_modal_open().set(false);

    let add_roommate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = form.get().to_payload();

        spawn_local(async move {
            match actions::create_roommate(&ctx.api(), &payload).await {
                Ok(roommates) => {
                    store_replace_roommates(&store, roommates);
                    set_form.set(RoommateForm::default());
                    close();
                }
                Err(e) => {
                    log::warn!("roommate create failed: {}", e);
                    notify::alert(&format!("Error: {}", e));
                }
            }
        });
    };

    view! {
        <Show when=move || store.roommate_modal_open().get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>"Add Roommate"</h3>
                        <button class="btn-close" on:click=move |_| close()>"×"</button>
                    </div>
                    <form class="add-roommate-form" on:submit=add_roommate>
                        <input
                            type="text"
                            required
                            placeholder="Name"
                            prop:value=move || form.read().name.clone()
                            on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                        />
                        <input
                            type="email"
                            required
                            placeholder="Email"
                            prop:value=move || form.read().email.clone()
                            on:input=move |ev| set_form.update(|f| f.email = event_target_value(&ev))
                        />
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn-primary">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
