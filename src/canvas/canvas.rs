use eframe::egui::{Color32, Pos2, Rect, Vec2, vec2};

use crate::canvas::geometry::{
    self, ELLIPSE_SEGMENTS, distance_to_outline, distance_to_segment, point_in_ellipse,
    point_in_polygon,
};

/// Opaque handle to an item living on a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Rectangle,
    Oval,
    Line,
    Polygon,
    Text,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Rectangle => "rectangle",
            ItemKind::Oval => "oval",
            ItemKind::Line => "line",
            ItemKind::Polygon => "polygon",
            ItemKind::Text => "text",
        }
    }
}

/// One drawable entry in the canvas stacking order.
///
/// Rectangles and ovals keep the two corners they were dragged between, lines
/// their two end points, polygons every vertex, and text a single anchor at
/// the center of the rendered string.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub coords: Vec<Pos2>,
    pub outline: Option<Color32>,
    pub fill: Option<Color32>,
    pub width: f32,
    pub text: Option<String>,
    pub font_size: f32,
}

impl CanvasItem {
    /// Loose bounding box of the recorded geometry.
    pub fn bounds(&self) -> Rect {
        match self.kind {
            ItemKind::Text => {
                let anchor = self.coords.first().copied().unwrap_or(Pos2::ZERO);
                Rect::from_center_size(anchor, self.text_extent())
            }
            _ => {
                let mut rect = Rect::NOTHING;
                for p in &self.coords {
                    rect.extend_with(*p);
                }
                rect.expand(self.width * 0.5)
            }
        }
    }

    /// Approximate size of the text block; the real glyph metrics live in the rasterizer.
    fn text_extent(&self) -> Vec2 {
        let chars = self.text.as_deref().map_or(0, |t| t.chars().count());
        vec2(chars as f32 * self.font_size * 0.6, self.font_size * 1.2)
    }

    /// Distance from `p` to the item, zero when `p` is inside a filled item.
    pub fn distance_to(&self, p: Pos2) -> f32 {
        let half_width = self.width * 0.5;
        let d = match self.kind {
            ItemKind::Rectangle => {
                let [a, b] = self.corners();
                let corners = geometry::rect_corners(a, b);
                if self.fill.is_some() && geometry::normalize_rect(a, b).contains(p) {
                    0.0
                } else {
                    distance_to_outline(p, &corners) - half_width
                }
            }
            ItemKind::Oval => {
                let [a, b] = self.corners();
                if self.fill.is_some() && point_in_ellipse(p, a, b) {
                    0.0
                } else {
                    let outline = geometry::ellipse_outline(a, b, ELLIPSE_SEGMENTS);
                    distance_to_outline(p, &outline) - half_width
                }
            }
            ItemKind::Line => match self.coords.as_slice() {
                [] => f32::INFINITY,
                [a] => p.distance(*a),
                points => points
                    .windows(2)
                    .map(|w| distance_to_segment(p, w[0], w[1]))
                    .fold(f32::INFINITY, f32::min)
                    - half_width,
            },
            ItemKind::Polygon => {
                if self.fill.is_some() && point_in_polygon(p, &self.coords) {
                    0.0
                } else {
                    distance_to_outline(p, &self.coords) - half_width
                }
            }
            ItemKind::Text => {
                let rect = self.bounds();
                if rect.contains(p) {
                    0.0
                } else {
                    rect.distance_to_pos(p)
                }
            }
        };
        d.max(0.0)
    }

    fn corners(&self) -> [Pos2; 2] {
        let a = self.coords.first().copied().unwrap_or(Pos2::ZERO);
        let b = self.coords.get(1).copied().unwrap_or(a);
        [a, b]
    }
}

/// Retained-mode drawing surface: items stacked in creation order.
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color32,
    items: Vec<CanvasItem>,
    next_id: u64,
    revision: u64,
}

impl Canvas {
    /// Create an empty canvas of the given pixel size.
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            background,
            items: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Current canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Center of the canvas, where new text is placed.
    pub fn center(&self) -> Pos2 {
        Pos2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }

    /// Bumped on every mutation so renderers know when to refresh.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items bottom to top.
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// Handles of every item bottom to top.
    pub fn find_all(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut CanvasItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn item_type(&self, id: ItemId) -> Option<ItemKind> {
        self.get(id).map(|item| item.kind)
    }

    pub fn coords(&self, id: ItemId) -> Option<&[Pos2]> {
        self.get(id).map(|item| item.coords.as_slice())
    }

    fn push(&mut self, mut item: CanvasItem) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        item.id = id;
        log::debug!("created {} {}", item.kind.label(), id);
        self.items.push(item);
        self.revision += 1;
        id
    }

    fn blank(kind: ItemKind, coords: Vec<Pos2>) -> CanvasItem {
        CanvasItem {
            id: ItemId(0),
            kind,
            coords,
            outline: None,
            fill: None,
            width: 1.0,
            text: None,
            font_size: 0.0,
        }
    }

    /// Unfilled rectangle spanned by two corners.
    pub fn create_rectangle(&mut self, p1: Pos2, p2: Pos2, outline: Color32) -> ItemId {
        let mut item = Self::blank(ItemKind::Rectangle, vec![p1, p2]);
        item.outline = Some(outline);
        self.push(item)
    }

    /// Unfilled oval inscribed in the box spanned by two corners.
    pub fn create_oval(&mut self, p1: Pos2, p2: Pos2, outline: Color32) -> ItemId {
        let mut item = Self::blank(ItemKind::Oval, vec![p1, p2]);
        item.outline = Some(outline);
        self.push(item)
    }

    /// Straight line; lines are colored through their fill.
    pub fn create_line(&mut self, p1: Pos2, p2: Pos2, fill: Color32, width: f32) -> ItemId {
        let mut item = Self::blank(ItemKind::Line, vec![p1, p2]);
        item.fill = Some(fill);
        item.width = width.max(1.0);
        self.push(item)
    }

    /// Closed polygon through `points`.
    pub fn create_polygon(
        &mut self,
        points: &[Pos2],
        outline: Option<Color32>,
        fill: Option<Color32>,
    ) -> ItemId {
        let mut item = Self::blank(ItemKind::Polygon, points.to_vec());
        item.outline = outline;
        item.fill = fill;
        self.push(item)
    }

    /// Text centered on `pos`.
    pub fn create_text(&mut self, pos: Pos2, text: &str, fill: Color32, font_size: f32) -> ItemId {
        let mut item = Self::blank(ItemKind::Text, vec![pos]);
        item.fill = Some(fill);
        item.text = Some(text.to_owned());
        item.font_size = font_size;
        self.push(item)
    }

    /// Remove a single item, returning whether it existed.
    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Remove every item. Handles are not reused afterwards.
    pub fn delete_all(&mut self) {
        if !self.items.is_empty() {
            log::debug!("deleting {} items", self.items.len());
        }
        self.items.clear();
        self.revision += 1;
    }

    /// Translate every coordinate of the item.
    pub fn move_by(&mut self, id: ItemId, delta: Vec2) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        for p in &mut item.coords {
            *p += delta;
        }
        self.revision += 1;
        true
    }

    pub fn set_fill(&mut self, id: ItemId, color: Color32) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.fill = Some(color);
        self.revision += 1;
        true
    }

    pub fn set_outline(&mut self, id: ItemId, color: Color32) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.outline = Some(color);
        self.revision += 1;
        true
    }

    /// Item nearest to `p`; the topmost one wins ties.
    pub fn find_closest(&self, p: Pos2) -> Option<ItemId> {
        let mut best: Option<(ItemId, f32)> = None;
        for item in &self.items {
            let d = item.distance_to(p);
            match best {
                Some((_, best_d)) if d > best_d => {}
                _ => best = Some((item.id, d)),
            }
        }
        best.map(|(id, _)| id)
    }
}
