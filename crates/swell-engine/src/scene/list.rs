use super::{DrawCmd, ZIndex};

/// A single draw item with its sort position.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    /// Insertion index; breaks ties between equal `z`.
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push` is O(1); paint-order iteration reuses an internal index buffer so a
/// warmed-up list does not allocate per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { z, order, cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices
            .sort_by_key(|&i| (items[i].z, items[i].order));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;

    fn tag(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::RoundedRect(r) => r.rect.origin.x,
                DrawCmd::Text(t) => t.origin.x,
            })
            .collect()
    }

    fn rect_at(x: f32) -> Rect {
        Rect::new(x, 0.0, 1.0, 1.0)
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        let white = Color::from_premul(1.0, 1.0, 1.0, 1.0);
        list.push_solid_rounded_rect(ZIndex(2), rect_at(0.0), 0.0, white);
        list.push_solid_rounded_rect(ZIndex(1), rect_at(1.0), 0.0, white);
        list.push_solid_rounded_rect(ZIndex(2), rect_at(2.0), 0.0, white);
        list.push_solid_rounded_rect(ZIndex(0), rect_at(3.0), 0.0, white);
        assert_eq!(tag(&mut list), vec![3.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn clear_resets_order_and_items() {
        let mut list = DrawList::new();
        list.push_solid_rounded_rect(ZIndex(0), rect_at(0.0), 0.0, Color::transparent());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(tag(&mut list), Vec::<f32>::new());
        list.push_solid_rounded_rect(ZIndex(0), rect_at(5.0), 0.0, Color::transparent());
        assert_eq!(list.items()[0].order, 0);
    }

    #[test]
    fn pushes_after_iteration_are_resorted() {
        let mut list = DrawList::new();
        let c = Color::transparent();
        list.push_solid_rounded_rect(ZIndex(5), rect_at(0.0), 0.0, c);
        let _ = tag(&mut list);
        list.push_solid_rounded_rect(ZIndex(-1), rect_at(1.0), 0.0, c);
        assert_eq!(tag(&mut list), vec![1.0, 0.0]);
    }

    #[test]
    fn text_and_shapes_share_one_order() {
        let mut list = DrawList::new();
        let c = Color::transparent();
        list.push_text(ZIndex(1), "fps", crate::text::FontId(0), 12.0, c, Vec2::new(7.0, 0.0));
        list.push_solid_rounded_rect(ZIndex(0), rect_at(4.0), 0.0, c);
        assert_eq!(tag(&mut list), vec![4.0, 7.0]);
    }

    #[test]
    fn empty_text_is_not_recorded() {
        let mut list = DrawList::new();
        list.push_text(ZIndex(0), "", crate::text::FontId(0), 12.0, Color::transparent(), Vec2::zero());
        assert_eq!(list.iter_in_paint_order().count(), 0);
    }
}
