use std::cell::RefCell;
use std::rc::Rc;

use slint::{ComponentHandle, ModelRc, StandardListViewItem, VecModel};
use wordsaver_core::Column;
use wordsaver_types::{Notice, NoticeLevel};

use crate::EditorWindow;
use crate::session::EditorSession;

/// Push the session's rows and the latest notice into the window
pub fn refresh(window: &EditorWindow, session: &EditorSession, notice: &Notice) {
    let rows: Vec<ModelRc<StandardListViewItem>> = session
        .records()
        .iter()
        .map(|record| {
            let cells: Vec<StandardListViewItem> = record
                .fields()
                .iter()
                .map(|field| StandardListViewItem::from(*field))
                .collect();
            ModelRc::new(VecModel::from(cells))
        })
        .collect();

    tracing::debug!("[SLINT] Showing {} rows", rows.len());
    window.set_rows(ModelRc::new(VecModel::from(rows)));
    window.set_selected_row(session.selected_row());
    show_notice(window, notice);
}

fn show_notice(window: &EditorWindow, notice: &Notice) {
    match notice.level {
        NoticeLevel::Error => tracing::error!("{}", notice.message),
        NoticeLevel::Warning => tracing::warn!("{}", notice.message),
        NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{}", notice.message),
    }
    window.set_status(notice.display_text().into());
}

fn selected(row: i32) -> Option<usize> {
    usize::try_from(row).ok()
}

pub fn wire_callbacks(window: &EditorWindow, session: Rc<RefCell<EditorSession>>) {
    {
        let session = session.clone();
        let window_weak = window.as_weak();
        window.on_load(move || {
            if let Some(w) = window_weak.upgrade() {
                let notice = session.borrow_mut().load();
                w.set_edit_text("".into());
                refresh(&w, &session.borrow(), &notice);
            }
        });
    }

    {
        let session = session.clone();
        let window_weak = window.as_weak();
        window.on_save(move || {
            if let Some(w) = window_weak.upgrade() {
                let notice = session.borrow_mut().save();
                show_notice(&w, &notice);
            }
        });
    }

    {
        let session = session.clone();
        let window_weak = window.as_weak();
        window.on_delete_row(move |row| {
            if let Some(w) = window_weak.upgrade() {
                let notice = session.borrow_mut().delete_row(selected(row));
                if notice.level == NoticeLevel::Success {
                    w.set_edit_text("".into());
                    refresh(&w, &session.borrow(), &notice);
                } else {
                    show_notice(&w, &notice);
                }
            }
        });
    }

    {
        let session = session.clone();
        let window_weak = window.as_weak();
        window.on_edit_cell(move |row, column, value| {
            if let Some(w) = window_weak.upgrade() {
                let Some(column) = selected(column).and_then(Column::from_index) else {
                    show_notice(&w, &Notice::warning("Please select a column to edit."));
                    return;
                };
                let notice = session
                    .borrow_mut()
                    .edit_cell(selected(row), column, value.to_string());
                if notice.level == NoticeLevel::Success {
                    refresh(&w, &session.borrow(), &notice);
                } else {
                    show_notice(&w, &notice);
                }
            }
        });
    }

    {
        let window_weak = window.as_weak();
        window.on_selection_changed(move |row, column| {
            if let Some(w) = window_weak.upgrade() {
                session.borrow_mut().select(selected(row));

                // Pre-fill the editor with the current cell value
                let value = selected(row)
                    .zip(selected(column).and_then(Column::from_index))
                    .and_then(|(row, column)| {
                        session.borrow().cell(row, column).map(str::to_string)
                    })
                    .unwrap_or_default();
                w.set_edit_text(value.into());
            }
        });
    }
}
