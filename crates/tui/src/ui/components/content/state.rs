/// What the content pane has observed from the navbar.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContentState {
    /// Payload of the most recent `selected` event.
    pub last_selected: Option<String>,
    /// Number of `selected` events received.
    pub selection_count: usize,
}

impl ContentState {
    pub fn record_selection(&mut self, label: &str) {
        self.last_selected = Some(label.to_string());
        self.selection_count += 1;
    }
}
