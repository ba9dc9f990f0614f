use tui_life::core::GridSnapshot;
use tui_life::engine::Controller;
use tui_life::term::{GridView, Viewport};
use tui_life::types::{Coord, Key, LifeConfig};

fn ch_at(fb: &tui_life::term::FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).map(|g| g.ch).unwrap_or('?')
}

fn row_text(fb: &tui_life::term::FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| ch_at(fb, x, y)).collect()
}

fn controller(rows: u16, cols: u16) -> Controller {
    let view = GridView::default();
    let config = view.fit(LifeConfig::default().with_size(rows, cols), Viewport::new(80, 24));
    Controller::new(&config)
}

#[test]
fn border_wraps_the_grid() {
    let c = controller(4, 5);
    let fb = GridView::default().render(&c.snapshot(), Viewport::new(80, 24));

    // 5 cols * 2 chars + 2 border columns, 4 rows + 2 border rows.
    assert_eq!(ch_at(&fb, 0, 0), '┌');
    assert_eq!(ch_at(&fb, 11, 0), '┐');
    assert_eq!(ch_at(&fb, 0, 5), '└');
    assert_eq!(ch_at(&fb, 11, 5), '┘');
    assert_eq!(ch_at(&fb, 5, 0), '─');
    assert_eq!(ch_at(&fb, 0, 3), '│');
}

#[test]
fn live_cell_is_two_columns_wide() {
    let mut c = controller(4, 5);
    c.grid_mut().toggle(Coord::new(2, 1));
    let fb = GridView::default().render(&c.snapshot(), Viewport::new(80, 24));

    assert_eq!(ch_at(&fb, 5, 2), '█');
    assert_eq!(ch_at(&fb, 6, 2), '█');
    assert_eq!(ch_at(&fb, 4, 2), '·');
    assert_eq!(ch_at(&fb, 7, 2), '·');
    assert_eq!(ch_at(&fb, 5, 1), '·');
}

#[test]
fn dead_cells_are_blank_without_edges() {
    let snap = controller(2, 2).snapshot();
    let fb = GridView::default()
        .with_edge_width(0)
        .render(&snap, Viewport::new(40, 10));
    assert_eq!(ch_at(&fb, 1, 1), ' ');
}

#[test]
fn side_panel_reports_state() {
    let mut c = controller(4, 5);
    c.grid_mut().toggle(Coord::new(0, 0));
    c.grid_mut().toggle(Coord::new(1, 0));
    let view = GridView::default();
    let viewport = Viewport::new(80, 24);

    let paused = view.render(&c.snapshot(), viewport);
    assert!(row_text(&paused, 0).contains("STATE"));
    assert!(row_text(&paused, 1).contains("PAUSED"));
    assert!(row_text(&paused, 3).contains("GEN"));
    assert!(row_text(&paused, 4).contains('0'));
    assert!(row_text(&paused, 6).contains("POP"));
    assert!(row_text(&paused, 7).contains('2'));

    c.handle_key_event(Key::ToggleRun);
    let running = view.render(&c.snapshot(), viewport);
    assert!(row_text(&running, 1).contains("RUNNING"));
}

#[test]
fn narrow_viewport_drops_the_panel() {
    let c = controller(4, 5);
    let fb = GridView::default().render(&c.snapshot(), Viewport::new(14, 8));
    assert!(!row_text(&fb, 0).contains("STATE"));
}

#[test]
fn render_into_reuses_framebuffer_across_sizes() {
    let view = GridView::default();
    let snap = GridSnapshot::default();
    let mut fb = view.render(&snap, Viewport::new(10, 4));
    view.render_into(&snap, Viewport::new(30, 12), &mut fb);
    assert_eq!(fb.width(), 30);
    assert_eq!(fb.height(), 12);
}

#[test]
fn oversized_snapshot_clips_to_viewport() {
    let cols = 40_000u16;
    let mut cells = vec![false; usize::from(cols) * 2];
    cells[1] = true;
    let snap = GridSnapshot {
        rows: 2,
        cols,
        cells,
        running: false,
        generation: 0,
        population: 1,
    };

    let view = GridView::default();
    let fb = view.render(&snap, Viewport::new(20, 6));
    assert_eq!(ch_at(&fb, 0, 0), '┌');
    assert_eq!(ch_at(&fb, 3, 1), '█');
    assert_eq!(ch_at(&fb, 4, 1), '█');
    assert_eq!(ch_at(&fb, 18, 1), '·');
    assert_eq!(ch_at(&fb, 19, 1), ' ');
    assert!(!row_text(&fb, 0).contains("STATE"));

    let huge = GridSnapshot {
        rows: u16::MAX,
        cols: u16::MAX,
        ..GridSnapshot::default()
    };
    let fb = view.render(&huge, Viewport::new(20, 6));
    assert_eq!(ch_at(&fb, 0, 0), '┌');
    assert_eq!(ch_at(&fb, 1, 1), '·');
}
