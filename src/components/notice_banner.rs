//! Notice Banner Component
//!
//! Non-blocking banner for submit and delete outcomes, dismissible.

use leptos::prelude::*;
use user_records::NoticeKind;

use crate::context::use_form_context;
use crate::store::FormViewStoreFields;

/// Banner showing the latest notice, if any
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store();

    move || {
        store.notice().get().map(|notice| {
            view! {
                <div class=notice_class(notice.kind) role="status">
                    <span>{notice.message}</span>
                    <button
                        type="button"
                        class="btn-close float-end"
                        aria-label="Dismiss"
                        on:click=move |_| ctx.dismiss_notice()
                    ></button>
                </div>
            }
        })
    }
}

/// Bootstrap alert classes per severity
pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "alert alert-success",
        NoticeKind::Warning => "alert alert-warning",
        NoticeKind::Error => "alert alert-danger",
    }
}
