//! Selection cursor movement.

use super::App;

impl App {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.gists.len() {
            self.selected += 1;
        }
    }

    pub fn move_first(&mut self) {
        self.selected = 0;
    }

    pub fn move_last(&mut self) {
        self.selected = self.gists.len().saturating_sub(1);
    }

    /// Keep the cursor inside the list after it was replaced.
    pub(crate) fn clamp_selection(&mut self) {
        if self.selected >= self.gists.len() {
            self.move_last();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::models::Gist;

    fn app_with(n: usize) -> App {
        let mut app = App::new();
        app.gists = (0..n).map(|i| Gist::new_local(i.to_string(), false)).collect();
        app
    }

    #[test]
    fn test_move_within_bounds() {
        let mut app = app_with(3);
        app.move_up();
        assert_eq!(app.selected, 0);

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 2);

        app.move_first();
        assert_eq!(app.selected, 0);
        app.move_last();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_empty_list() {
        let mut app = app_with(0);
        app.move_down();
        app.move_last();
        assert_eq!(app.selected, 0);
        assert!(app.selected_gist().is_none());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut app = app_with(5);
        app.move_last();
        app.gists.truncate(2);
        app.clamp_selection();
        assert_eq!(app.selected, 1);
    }
}
