/// Which panel of a screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Idle,
    Form,
    List,
}

/// Per-screen view state. The form and the list are mutually exclusive, and
/// each carries the transient data that only lives while it is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScreenView<F, L> {
    #[default]
    Idle,
    FormOpen(F),
    ListOpen(L),
}

impl<F: Default, L: Default> ScreenView<F, L> {
    /// Opens a fresh form, or closes it when it is already open.
    pub fn toggle_form(&mut self) {
        *self = match self {
            ScreenView::FormOpen(_) => ScreenView::Idle,
            _ => ScreenView::FormOpen(F::default()),
        };
    }

    /// Opens a fresh list, or closes it when it is already open.
    pub fn toggle_list(&mut self) {
        *self = match self {
            ScreenView::ListOpen(_) => ScreenView::Idle,
            _ => ScreenView::ListOpen(L::default()),
        };
    }

    pub fn open_list(&mut self) {
        *self = ScreenView::ListOpen(L::default());
    }
}

impl<F, L> ScreenView<F, L> {
    pub fn panel(&self) -> Panel {
        match self {
            ScreenView::Idle => Panel::Idle,
            ScreenView::FormOpen(_) => Panel::Form,
            ScreenView::ListOpen(_) => Panel::List,
        }
    }

    pub fn close(&mut self) {
        *self = ScreenView::Idle;
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            ScreenView::FormOpen(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            ScreenView::FormOpen(form) => Some(form),
            _ => None,
        }
    }

    pub fn list(&self) -> Option<&L> {
        match self {
            ScreenView::ListOpen(list) => Some(list),
            _ => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut L> {
        match self {
            ScreenView::ListOpen(list) => Some(list),
            _ => None,
        }
    }
}
