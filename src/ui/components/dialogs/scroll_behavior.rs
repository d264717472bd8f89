use ratatui::widgets::ScrollbarState;

const PAGE_LINES: usize = 10;

/// Scroll position of a text overlay. The offset may run past the end of the
/// content; rendering clamps it.
#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl ScrollState {
    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }

    pub fn scroll_up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_LINES));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_LINES));
    }

    pub fn scroll_to_top(&mut self) {
        self.set(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
