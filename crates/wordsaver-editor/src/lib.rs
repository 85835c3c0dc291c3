use std::cell::RefCell;
use std::rc::Rc;

use slint::ComponentHandle;
use wordsaver_config::Config;
use wordsaver_core::WordStore;

mod events;
mod session;

pub use session::EditorSession;

slint::include_modules!();

/// Open the editor window on the configured words file and block until it closes
pub fn run(config: &Config) -> anyhow::Result<()> {
    let window = EditorWindow::new()?;
    window.set_window_title(config.ui.window_title.clone().into());
    window.window().set_size(slint::LogicalSize::new(
        config.ui.window_width as f32,
        config.ui.window_height as f32,
    ));

    let session = Rc::new(RefCell::new(EditorSession::new(WordStore::new(
        config.store.path.clone(),
    ))));

    events::wire_callbacks(&window, session.clone());

    // Initial load
    let notice = session.borrow_mut().load();
    events::refresh(&window, &session.borrow(), &notice);

    window.run()?;

    if session.borrow().is_dirty() {
        tracing::warn!("Editor closed with unsaved changes");
    }

    Ok(())
}
