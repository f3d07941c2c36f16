//! Members Panel Component
//!
//! Search, count, table and the member dialogs.

use leptos::prelude::*;

use crate::components::{AddMemberModal, MemberTable, RemoveMemberDialog};
use crate::context::use_app_context;
use crate::member_view::{member_count_label, member_rows};
use crate::store::{store_demote_member, store_promote_member, use_page_store, PageStateStoreFields};

#[component]
pub fn MembersPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let search = RwSignal::new(String::new());
    let add_open = RwSignal::new(false);
    let remove_open = RwSignal::new(false);
    let remove_target = RwSignal::new(None::<(u32, String)>);

    let rows = Memo::new(move |_| {
        let term = search.get();
        member_rows(&store.roster().read(), &term)
    });
    let count = move || member_count_label(store.roster().read().count());

    let on_promote = Callback::new(move |id: u32| {
        if let Some(member) = store_promote_member(&store, id) {
            ctx.notify(format!("{} has been promoted to {}!", member.name, member.role));
        }
    });
    let on_demote = Callback::new(move |id: u32| {
        if let Some(member) = store_demote_member(&store, id) {
            ctx.notify(format!("{} has been demoted to {}.", member.name, member.role));
        }
    });
    let on_remove = Callback::new(move |target: (u32, String)| {
        remove_target.set(Some(target));
        remove_open.set(true);
    });

    view! {
        <div class="members-header">
            <h2>"Members"</h2>
            <span id="member-count" class="member-count">{count}</span>
        </div>
        <div class="members-toolbar">
            <input
                type="search"
                id="member-search"
                class="search-input"
                placeholder="Search members..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <button
                type="button"
                id="add-member-btn"
                class="btn btn-primary"
                on:click=move |_| add_open.set(true)
            >
                "Add Member"
            </button>
        </div>
        <MemberTable rows=rows on_promote=on_promote on_demote=on_demote on_remove=on_remove />
        <AddMemberModal open=add_open />
        <RemoveMemberDialog open=remove_open target=remove_target />
    }
}
