// Example: a horizontal grid of thumbnails, three per column.
use adaptive_scroll::{
    AdaptiveGridScroll, Orientation, Padding, ScrollContainer, ScrollItem, ScrollOptions, Vec2,
};

#[derive(Debug)]
struct Thumb {
    index: usize,
    position: Vec2,
}

impl ScrollItem for Thumb {
    type Parent = str;

    fn set_parent(&mut self, _parent: &str) {}

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

struct Strip {
    normalized: f32,
}

impl ScrollContainer for Strip {
    type Content = str;

    fn content(&self) -> &str {
        "strip"
    }

    fn orientation(&self) -> Orientation {
        Orientation::Horizontal
    }

    fn viewport_size(&self) -> Vec2 {
        Vec2::new(600.0, 330.0)
    }

    fn normalized_position(&self) -> f32 {
        self.normalized
    }

    fn set_normalized_position(&mut self, position: f32) {
        self.normalized = position;
    }

    fn set_content_size(&mut self, size: Vec2) {
        println!("content_size={size:?}");
    }
}

fn main() {
    let options = ScrollOptions::new(Vec2::new(100.0, 100.0))
        .with_spacing(Vec2::new(10.0, 10.0))
        .with_padding(Padding::uniform(5.0))
        .with_rebuild_on_overrun(true);
    let mut grid: AdaptiveGridScroll<Thumb, Strip> =
        AdaptiveGridScroll::grid(Strip { normalized: 0.0 }, options, 3);

    grid.initialize(
        |index| {
            Some(Thumb {
                index,
                position: Vec2::ZERO,
            })
        },
        |_, _| true,
        1_000usize,
    )
    .expect("valid options");
    println!("columns={:?}", grid.active_range());

    // A fling: the container jumps far in one frame.
    grid.container_mut().normalized = 0.5;
    grid.on_scroll_changed();
    println!(
        "offset={} columns={:?} items={:?}",
        grid.scroll_offset(),
        grid.active_range(),
        grid.visible_item_range()
    );

    grid.for_each_visible_item(|_, thumb| {
        if thumb.index % 3 == 0 {
            println!("thumb {} at {:?}", thumb.index, thumb.position);
        }
    });
    grid.cleanup();
}
