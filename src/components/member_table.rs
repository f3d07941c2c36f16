//! Member Table Component
//!
//! Renders `#members-table` from the row view-models. The body is rebuilt
//! whenever the rows change.

use leptos::prelude::*;

use crate::member_view::{MemberRow, RoleAction};

#[component]
pub fn MemberTable(
    rows: Memo<Vec<MemberRow>>,
    on_promote: Callback<u32>,
    on_demote: Callback<u32>,
    on_remove: Callback<(u32, String)>,
) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    <h3>"No members found"</h3>
                    <p>"Try adjusting your search or add new members to get started."</p>
                </div>
            }
        >
            <table id="members-table" class="members-table">
                <thead>
                    <tr>
                        <th>"Member"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| member_row(row, on_promote, on_demote, on_remove))
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

fn member_row(
    row: MemberRow,
    on_promote: Callback<u32>,
    on_demote: Callback<u32>,
    on_remove: Callback<(u32, String)>,
) -> impl IntoView {
    let MemberRow {
        id,
        name,
        email,
        avatar,
        role_label,
        role_class,
        status_label,
        status_class,
        action,
        removing,
    } = row;

    let role_button = action.map(|action| {
        let title = action.title();
        match action {
            RoleAction::Promote(_) => view! {
                <button
                    type="button"
                    class="btn-icon promote-btn"
                    title=title
                    on:click=move |_| on_promote.run(id)
                >
                    "▲"
                </button>
            }
            .into_any(),
            RoleAction::Demote(_) => view! {
                <button
                    type="button"
                    class="btn-icon demote-btn"
                    title=title
                    on:click=move |_| on_demote.run(id)
                >
                    "▼"
                </button>
            }
            .into_any(),
        }
    });

    let alt = name.clone();
    let remove_name = name.clone();

    view! {
        <tr class=if removing { "member-row removing" } else { "member-row" } data-member-id=id>
            <td class="member-info">
                <img class="member-avatar" src=avatar alt=alt />
                <div>
                    <div class="member-name">{name}</div>
                    <div class="member-email">{email}</div>
                </div>
            </td>
            <td>
                <span class=role_class>{role_label}</span>
            </td>
            <td>
                <span class=status_class>{status_label}</span>
            </td>
            <td class="member-actions">
                {role_button}
                <button
                    type="button"
                    class="btn-icon danger remove-btn"
                    title="Remove Member"
                    on:click=move |_| on_remove.run((id, remove_name.clone()))
                >
                    "✕"
                </button>
            </td>
        </tr>
    }
}
