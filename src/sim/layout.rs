//! Static house layout: outer walls, partitions and rooms
//!
//! The house is split into `room_count` vertical strips of equal (floored)
//! width; the last strip takes whatever width is left over. Partitions have
//! no doorways, so every room is sealed off from the others.

use serde::Serialize;
use thiserror::Error;

use super::rect::Rect;

/// Layout construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("room count must be at least 1")]
    InvalidRoomCount,
    #[error("wall thickness must be positive and finite, got {0}")]
    InvalidWallThickness(f32),
    #[error("house {w}x{h} is too small for {rooms} rooms with {thickness} walls")]
    HouseTooSmall {
        w: f32,
        h: f32,
        rooms: usize,
        thickness: f32,
    },
}

/// Walls and rooms derived from a house rectangle
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    house: Rect,
    wall_thickness: f32,
    walls: Vec<Rect>,
    rooms: Vec<Rect>,
}

impl Layout {
    /// Build the wall set and room interiors for `house`
    pub fn new(house: Rect, room_count: usize, wall_thickness: f32) -> Result<Self, LayoutError> {
        if room_count == 0 {
            return Err(LayoutError::InvalidRoomCount);
        }
        if !(wall_thickness.is_finite() && wall_thickness > 0.0) {
            return Err(LayoutError::InvalidWallThickness(wall_thickness));
        }

        let t = wall_thickness;
        let strip_width = (house.w / room_count as f32).floor();
        let last_width = house.right() - (house.x + (room_count - 1) as f32 * strip_width);
        // Rooms are strips inset by the wall thickness; both dimensions must survive.
        if strip_width.min(last_width) <= t * 2.0 || house.h <= t * 2.0 {
            return Err(LayoutError::HouseTooSmall {
                w: house.w,
                h: house.h,
                rooms: room_count,
                thickness: t,
            });
        }

        let mut walls = Vec::with_capacity(4 + room_count - 1);
        // Top and bottom run past the side walls to close the corners
        walls.push(Rect::new(house.x - t, house.y - t, house.w + t * 2.0, t));
        walls.push(Rect::new(house.x - t, house.bottom(), house.w + t * 2.0, t));
        walls.push(Rect::new(house.x - t, house.y, t, house.h));
        walls.push(Rect::new(house.right(), house.y, t, house.h));

        for i in 1..room_count {
            let boundary = house.x + i as f32 * strip_width;
            walls.push(Rect::new(boundary - t / 2.0, house.y, t, house.h));
        }

        let rooms = (0..room_count)
            .map(|i| {
                let x = house.x + i as f32 * strip_width;
                let w = if i == room_count - 1 {
                    house.right() - x
                } else {
                    strip_width
                };
                Rect::new(x, house.y, w, house.h).inflate(-t)
            })
            .collect();

        Ok(Self {
            house,
            wall_thickness: t,
            walls,
            rooms,
        })
    }

    pub fn house(&self) -> Rect {
        self.house
    }

    pub fn wall_thickness(&self) -> f32 {
        self.wall_thickness
    }

    /// Every impassable rectangle (4 outer edges, then partitions left to right)
    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    /// Room interiors, left to right
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    pub fn room(&self, index: usize) -> Option<&Rect> {
        self.rooms.get(index)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::rects_overlap;
    use proptest::prelude::*;

    fn default_house() -> Rect {
        Rect::new(HOUSE_X, HOUSE_Y, HOUSE_WIDTH, HOUSE_HEIGHT)
    }

    #[test]
    fn test_default_layout_counts() {
        let layout = Layout::new(default_house(), ROOM_COUNT, WALL_THICKNESS).unwrap();
        assert_eq!(layout.room_count(), 5);
        assert_eq!(layout.walls().len(), 4 + 4);
    }

    #[test]
    fn test_last_room_absorbs_remainder() {
        // 803 / 5 = 160.6 -> strips of 160, last strip 163
        let house = Rect::new(0.0, 0.0, 803.0, 400.0);
        let layout = Layout::new(house, 5, 8.0).unwrap();
        let first = layout.room(0).unwrap();
        let last = layout.room(4).unwrap();
        assert!((first.w - (160.0 - 16.0)).abs() < 1e-4);
        assert!((last.w - (163.0 - 16.0)).abs() < 1e-4);
        assert!((last.right() - (803.0 - 8.0)).abs() < 1e-4);
    }

    #[test]
    fn test_partitions_centered_on_boundaries() {
        let house = Rect::new(0.0, 0.0, 500.0, 200.0);
        let layout = Layout::new(house, 5, 8.0).unwrap();
        let partitions = &layout.walls()[4..];
        for (i, wall) in partitions.iter().enumerate() {
            let boundary = (i + 1) as f32 * 100.0;
            assert!((wall.x + wall.w / 2.0 - boundary).abs() < 1e-4);
            assert_eq!(wall.h, 200.0);
        }
    }

    #[test]
    fn test_outer_walls_close_corners() {
        let layout = Layout::new(default_house(), ROOM_COUNT, WALL_THICKNESS).unwrap();
        let top = layout.walls()[0];
        let left = layout.walls()[2];
        assert_eq!(top.x, left.x);
        assert_eq!(top.bottom(), left.y);
    }

    #[test]
    fn test_rejects_bad_config() {
        let house = default_house();
        assert_eq!(
            Layout::new(house, 0, 8.0).unwrap_err(),
            LayoutError::InvalidRoomCount
        );
        assert!(matches!(
            Layout::new(house, 5, 0.0),
            Err(LayoutError::InvalidWallThickness(_))
        ));
        assert!(matches!(
            Layout::new(house, 5, -3.0),
            Err(LayoutError::InvalidWallThickness(_))
        ));
        assert!(matches!(
            Layout::new(house, 5, f32::NAN),
            Err(LayoutError::InvalidWallThickness(_))
        ));
        assert!(matches!(
            Layout::new(house, 5, f32::INFINITY),
            Err(LayoutError::InvalidWallThickness(_))
        ));
        assert!(matches!(
            Layout::new(house, 500, 8.0),
            Err(LayoutError::HouseTooSmall { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_rooms_never_overlap_walls_or_each_other(
            room_count in 1usize..12,
            thickness in 0.5f32..20.0,
            w in 600.0f32..1600.0,
            h in 100.0f32..800.0,
        ) {
            let house = Rect::new(40.0, 60.0, w, h);
            let layout = Layout::new(house, room_count, thickness).unwrap();
            prop_assert_eq!(layout.room_count(), room_count);

            for (i, room) in layout.rooms().iter().enumerate() {
                prop_assert!(room.w > 0.0 && room.h > 0.0);
                for wall in layout.walls() {
                    prop_assert!(!rects_overlap(room, wall));
                }
                for other in &layout.rooms()[i + 1..] {
                    prop_assert!(!rects_overlap(room, other));
                }
            }
        }
    }
}
