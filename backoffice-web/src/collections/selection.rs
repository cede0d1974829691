//! Row selection and modal visibility for list pages.

/// How a selected row is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    View,
    Edit,
}

/// Which record a list page has selected and how it is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_id: Option<String>,
    pub mode: ModalMode,
    pub show_modal: bool,
    pub is_edit_open: bool,
}

impl SelectionState {
    /// Open the view modal for the single selected id.
    ///
    /// Returns `false` and changes nothing unless exactly one id is given.
    pub fn view_by_id(&mut self, ids: &[String]) -> bool {
        let [id] = ids else {
            return false;
        };
        self.selected_id = Some(id.clone());
        self.mode = ModalMode::View;
        self.show_modal = true;
        self.is_edit_open = false;
        true
    }

    /// Open the edit form for the single selected id.
    pub fn edit_by_id(&mut self, ids: &[String]) -> bool {
        let [id] = ids else {
            return false;
        };
        self.selected_id = Some(id.clone());
        self.mode = ModalMode::Edit;
        self.show_modal = true;
        self.is_edit_open = true;
        true
    }

    /// Hide the modal. The selection is kept for the next open.
    pub fn close(&mut self) {
        self.show_modal = false;
        self.is_edit_open = false;
    }
}

/// A detail modal holding a copy of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowModal<T> {
    pub open: bool,
    pub selected: Option<T>,
}

impl<T> Default for RowModal<T> {
    fn default() -> Self {
        Self {
            open: false,
            selected: None,
        }
    }
}

impl<T> RowModal<T> {
    pub fn open(&mut self, row: T) {
        self.selected = Some(row);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_view_requires_exactly_one_id() {
        let mut selection = SelectionState::default();

        assert!(!selection.view_by_id(&[]));
        assert!(!selection.view_by_id(&ids(&["1", "2"])));
        assert_eq!(selection, SelectionState::default());

        assert!(selection.view_by_id(&ids(&["7"])));
        assert_eq!(selection.selected_id.as_deref(), Some("7"));
        assert_eq!(selection.mode, ModalMode::View);
        assert!(selection.show_modal);
        assert!(!selection.is_edit_open);
    }

    #[test]
    fn test_edit_opens_edit_form() {
        let mut selection = SelectionState::default();
        selection.view_by_id(&ids(&["3"]));

        assert!(selection.edit_by_id(&ids(&["4"])));
        assert_eq!(selection.selected_id.as_deref(), Some("4"));
        assert_eq!(selection.mode, ModalMode::Edit);
        assert!(selection.is_edit_open);

        assert!(!selection.edit_by_id(&ids(&["4", "5"])));
        assert_eq!(selection.selected_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_close_keeps_selection() {
        let mut selection = SelectionState::default();
        selection.edit_by_id(&ids(&["9"]));
        selection.close();

        assert!(!selection.show_modal);
        assert!(!selection.is_edit_open);
        assert_eq!(selection.selected_id.as_deref(), Some("9"));
    }

    #[test]
    fn test_row_modal_clears_on_close() {
        let mut modal = RowModal::default();
        modal.open("row");
        assert!(modal.open);
        assert_eq!(modal.selected, Some("row"));

        modal.close();
        assert!(!modal.open);
        assert_eq!(modal.selected, None);
    }
}
