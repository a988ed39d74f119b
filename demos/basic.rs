// Example: a 10k-row list driven by a fake scroll container.
use std::cell::RefCell;
use std::rc::Rc;

use adaptive_scroll::{
    AdaptiveScroll, Orientation, ScrollContainer, ScrollItem, ScrollOptions, Vec2,
};

struct Row {
    index: usize,
    y: f32,
}

impl ScrollItem for Row {
    type Parent = ();

    fn set_parent(&mut self, _parent: &()) {}

    fn set_position(&mut self, position: Vec2) {
        self.y = position.y;
    }
}

struct Container {
    viewport: Vec2,
    normalized: f32,
    content: Vec2,
}

impl ScrollContainer for Container {
    type Content = ();

    fn content(&self) -> &() {
        &()
    }

    fn orientation(&self) -> Orientation {
        Orientation::Vertical
    }

    fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    fn normalized_position(&self) -> f32 {
        self.normalized
    }

    fn set_normalized_position(&mut self, position: f32) {
        self.normalized = position;
    }

    fn set_content_size(&mut self, size: Vec2) {
        self.content = size;
    }
}

fn main() {
    let container = Container {
        viewport: Vec2::new(320.0, 480.0),
        normalized: 0.0,
        content: Vec2::ZERO,
    };
    let options = ScrollOptions::new(Vec2::new(320.0, 48.0))
        .with_spacing(Vec2::new(0.0, 4.0))
        .with_threshold(48.0);
    let mut list: AdaptiveScroll<Row, Container> = AdaptiveScroll::new(container, options);

    let pool: Rc<RefCell<Vec<Row>>> = Rc::default();
    let reuse = Rc::clone(&pool);
    list.initialize(
        move |index| {
            let mut row = reuse.borrow_mut().pop().unwrap_or(Row { index, y: 0.0 });
            row.index = index;
            Some(row)
        },
        move |_, row| {
            pool.borrow_mut().push(row);
            true
        },
        10_000usize,
    )
    .expect("valid options");

    println!("content_size={:?}", list.container().content);
    println!("window={:?}", list.visible_item_range());

    // Drag down in small steps, notifying the engine after each move.
    for _ in 0..20 {
        let adapter = list.content_adapter().expect("initialized");
        let offset = list.scroll_offset() + 30.0;
        list.container_mut().normalized = adapter.normalized_for_offset(offset);
        list.on_scroll_changed();
    }
    println!(
        "after drag: offset={} window={:?}",
        list.scroll_offset(),
        list.visible_item_range()
    );

    list.change_position(5_000);
    if let Some(row) = list.try_get_visible_item(5_000) {
        println!("row {} at y={}", row.index, row.y);
    }
    println!("stats={:?}", list.stats());

    list.cleanup();
}
