//! Car movement logic for the road crossing simulation
//!
//! Standalone implementation that doesn't depend on Bevy.

use rand::Rng;

use super::types::{
    lane_center, BoundingBox, Position, CAR_HALF_WIDTH, CAR_LENGTH, CAR_SPAWN_MAX_Y,
    CAR_SPAWN_MIN_Y, CAR_WRAP_Y, NUM_LANES, SCREEN_HEIGHT,
};

/// Slowest base speed drawn for a car
pub const MIN_BASE_SPEED: i32 = 2;

/// Base speed ceiling before the level is added; cars on `level` draw base
/// speeds up to `BASE_SPEED_CEILING + level`
pub const BASE_SPEED_CEILING: i32 = 4;

/// Flat bonus added to every drawn speed
pub const SPEED_BONUS: i32 = 2;

/// Result of a car update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarUpdateResult {
    /// Car moved along its lane
    Continue,
    /// Car left the top of the screen and re-entered from below
    Wrapped,
}

/// A car driving up its lane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimCar {
    /// Lane centre `x` and bottom `y` of the car
    pub position: Position,
    pub length: i32,
    /// Pixels travelled per tick
    pub speed: i32,
}

impl SimCar {
    pub fn new(position: Position, speed: i32) -> Self {
        Self {
            position,
            length: CAR_LENGTH,
            speed,
        }
    }

    /// Move the car one tick; cars never leave their lane, they loop
    pub fn update(&mut self) -> CarUpdateResult {
        self.position.y += self.speed;
        if self.position.y > SCREEN_HEIGHT {
            self.position.y = CAR_WRAP_Y;
            CarUpdateResult::Wrapped
        } else {
            CarUpdateResult::Continue
        }
    }

    /// Area the car occupies for collision purposes
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.position.x - CAR_HALF_WIDTH,
            self.position.y,
            self.position.x + CAR_HALF_WIDTH,
            self.position.y + self.length,
        )
    }
}

/// Inclusive speed range for cars on `level`
pub fn speed_range(level: u32) -> std::ops::RangeInclusive<i32> {
    let ceiling = BASE_SPEED_CEILING.saturating_add(level.min(i32::MAX as u32) as i32);
    (MIN_BASE_SPEED + SPEED_BONUS)..=ceiling.saturating_add(SPEED_BONUS)
}

/// Build the car set for `level`: one car per lane, ordered left to right,
/// each starting somewhere below the visible area
pub fn generate_cars<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Vec<SimCar> {
    let speeds = speed_range(level);
    (0..NUM_LANES)
        .map(|lane| {
            let y = rng.random_range(CAR_SPAWN_MIN_Y..=CAR_SPAWN_MAX_Y);
            let speed = rng.random_range(speeds.clone());
            SimCar::new(Position::new(lane_center(lane), y), speed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn speed_range_grows_with_level() {
        assert_eq!(speed_range(1), 4..=7);
        assert_eq!(speed_range(5), 4..=11);
        assert!(!speed_range(u32::MAX).is_empty());
    }

    #[test]
    fn one_car_per_lane_below_the_screen() {
        let mut rng = StdRng::seed_from_u64(11);
        let cars = generate_cars(3, &mut rng);
        assert_eq!(cars.len(), NUM_LANES);

        for (lane, car) in cars.iter().enumerate() {
            assert_eq!(car.position.x, lane_center(lane));
            assert!((CAR_SPAWN_MIN_Y..=CAR_SPAWN_MAX_Y).contains(&car.position.y));
            assert!(speed_range(3).contains(&car.speed));
            assert_eq!(car.length, CAR_LENGTH);
        }
    }

    #[test]
    fn same_seed_same_cars() {
        let a = generate_cars(2, &mut StdRng::seed_from_u64(99));
        let b = generate_cars(2, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn car_wraps_past_the_top() {
        let mut car = SimCar::new(Position::new(70, 495), 6);
        assert_eq!(car.update(), CarUpdateResult::Wrapped);
        assert_eq!(car.position.y, CAR_WRAP_Y);

        let mut car = SimCar::new(Position::new(70, 494), 6);
        assert_eq!(car.update(), CarUpdateResult::Continue);
        assert_eq!(car.position.y, SCREEN_HEIGHT);
    }
}
