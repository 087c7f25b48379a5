//! Keyboard and mouse routing.
//!
//! Precedence: Ctrl+C, then the open drawer, then the search field, then
//! global navigation, then whatever section has focus.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use futurework_core::DrawerFocus;

use crate::ui::{App, Focus, InputMode};

/// Rows moved per wheel notch
const WHEEL_STEP: i32 = 3;

fn page_step(app: &App) -> i32 {
    (app.page_area.height.saturating_sub(2)).max(1) as i32
}

pub(crate) fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    let code = key.code;
    let modifiers = key.modifiers;

    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.drawer.is_open() {
        handle_drawer_key(app, code);
        return;
    }

    if app.input_mode == InputMode::Search {
        handle_search_key(app, code, modifiers);
        return;
    }

    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab => app.focus_next(now),
        KeyCode::BackTab => app.focus_prev(now),
        KeyCode::Char('j') => app.scroll_page(1),
        KeyCode::Char('k') => app.scroll_page(-1),
        KeyCode::PageDown => app.scroll_page(page_step(app)),
        KeyCode::PageUp => app.scroll_page(-page_step(app)),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Esc => app.set_focus(Focus::Page, now),
        _ => match app.focus {
            Focus::Carousel => handle_carousel_key(app, code, now),
            Focus::Signals | Focus::Insights => handle_stream_key(app, code),
            Focus::Page | Focus::About => match code {
                KeyCode::Down => app.scroll_page(1),
                KeyCode::Up => app.scroll_page(-1),
                _ => {}
            },
        },
    }
}

fn handle_drawer_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_drawer(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab | KeyCode::BackTab => app.drawer.cycle_focus(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.drawer.focus() == Some(DrawerFocus::Dismiss) {
                app.close_drawer();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_drawer(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_drawer(-1),
        KeyCode::PageDown => app.scroll_drawer(10),
        KeyCode::PageUp => app.scroll_drawer(-10),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => app.clear_search(),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => app.push_search_char(c),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Enter | KeyCode::Esc => app.end_search(),
        _ => {}
    }
}

fn handle_carousel_key(app: &mut App, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.prev_slide(now),
        KeyCode::Right | KeyCode::Char('l') => app.next_slide(now),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.go_to_slide(digit as usize - 1, now);
            }
        }
        KeyCode::Char(' ') => app.toggle_autoplay(now),
        KeyCode::Enter => app.activate_slide_cta(now),
        KeyCode::Down => app.scroll_page(1),
        KeyCode::Up => app.scroll_page(-1),
        _ => {}
    }
}

fn handle_stream_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down => app.move_cursor(1),
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('c') => app.cycle_category(),
        KeyCode::Char('s') => app.toggle_sort_field(),
        KeyCode::Char('o') => app.toggle_sort_order(),
        KeyCode::Char('m') => {
            if let Some(kind) = app.focus.kind() {
                app.show_more(kind);
            }
        }
        _ => {}
    }
}

pub(crate) fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Moved => app.pointer_moved(mouse.column, mouse.row, now),
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row, now),
        MouseEventKind::ScrollUp => {
            if app.drawer.is_open() {
                app.scroll_drawer(-WHEEL_STEP);
            } else {
                app.scroll_page(-WHEEL_STEP);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.drawer.is_open() {
                app.scroll_drawer(WHEEL_STEP);
            } else {
                app.scroll_page(WHEEL_STEP);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futurework_core::models::ContentKind;
    use futurework_core::LoadedContent;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(now: Instant) -> App {
        let mut app = App::new(Duration::from_millis(9000), false, now);
        app.apply_content(LoadedContent::bundled());
        app.screen = Rect::new(0, 0, 100, 30);
        app.page_area = Rect::new(0, 0, 100, 29);
        app.layout.total_height = 200;
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();
        let mut app = app(now);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
        assert!(!app.running);

        let mut app = self::app(now);
        handle_key(&mut app, key(KeyCode::Char('q')), now);
        assert!(!app.running);
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let now = Instant::now();
        let mut app = app(now);
        app.set_focus(Focus::Signals, now);
        handle_key(&mut app, key(KeyCode::Char('/')), now);
        assert_eq!(app.input_mode, InputMode::Search);

        for c in "quit".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)), now);
        }
        assert!(app.running);
        assert_eq!(app.query(ContentKind::Signals), "quit");

        handle_key(&mut app, key(KeyCode::Backspace), now);
        assert_eq!(app.query(ContentKind::Signals), "qui");

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL), now);
        assert_eq!(app.query(ContentKind::Signals), "");

        handle_key(&mut app, key(KeyCode::Esc), now);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.focus, Focus::Signals);
    }

    #[test]
    fn test_carousel_digit_and_arrows() {
        let now = Instant::now();
        let mut app = app(now);
        handle_key(&mut app, key(KeyCode::Tab), now);
        assert_eq!(app.focus, Focus::Carousel);

        handle_key(&mut app, key(KeyCode::Char('3')), now);
        assert_eq!(app.carousel.active_index(), 2);
        handle_key(&mut app, key(KeyCode::Right), now);
        assert_eq!(app.carousel.active_index(), 0);
        handle_key(&mut app, key(KeyCode::Left), now);
        assert_eq!(app.carousel.active_index(), 2);

        // Out of range digit is ignored
        handle_key(&mut app, key(KeyCode::Char('9')), now);
        assert_eq!(app.carousel.active_index(), 2);
    }

    #[test]
    fn test_drawer_keyboard_flow_restores_focus() {
        let now = Instant::now();
        let mut app = app(now);
        app.set_focus(Focus::Signals, now);
        handle_key(&mut app, key(KeyCode::Down), now);
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert!(app.drawer.is_open());
        assert_eq!(app.drawer.focus(), Some(DrawerFocus::Dismiss));

        handle_key(&mut app, key(KeyCode::Tab), now);
        assert_eq!(app.drawer.focus(), Some(DrawerFocus::Body));
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert!(app.drawer.is_open());

        handle_key(&mut app, key(KeyCode::Tab), now);
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert!(!app.drawer.is_open());
        assert_eq!(app.focus, Focus::Signals);
        assert_eq!(app.signal_cursor, 1);
    }

    #[test]
    fn test_page_scroll_is_locked_while_drawer_is_open() {
        let now = Instant::now();
        let mut app = app(now);
        handle_key(&mut app, key(KeyCode::PageDown), now);
        let scrolled = app.page_scroll;
        assert!(scrolled > 0);

        app.set_focus(Focus::Insights, now);
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert!(app.drawer.is_open());

        handle_key(&mut app, key(KeyCode::End), now);
        handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 10, 10), now);
        assert_eq!(app.page_scroll, scrolled);

        handle_key(&mut app, key(KeyCode::Esc), now);
        assert!(!app.drawer.is_open());
        assert_eq!(app.page_scroll, scrolled);
    }

    #[test]
    fn test_wheel_scrolls_drawer_body_when_open() {
        let now = Instant::now();
        let mut app = app(now);
        app.open_item(ContentKind::Signals, 0);
        app.drawer_body_max = 10;

        handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 80, 10), now);
        assert_eq!(app.drawer.body_scroll(), 3);
        handle_mouse(&mut app, mouse(MouseEventKind::ScrollUp, 80, 10), now);
        assert_eq!(app.drawer.body_scroll(), 0);
    }

    #[test]
    fn test_backdrop_click_closes_drawer() {
        let now = Instant::now();
        let mut app = app(now);
        app.open_item(ContentKind::Insights, 1);

        // Inside the panel
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 90, 5), now);
        assert!(app.drawer.is_open());

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 1, 5), now);
        assert!(!app.drawer.is_open());
    }
}
