use std::f64::consts::TAU;

use rand::Rng;

use super::types::Spark;

pub const BURST_SIZE: usize = 5;
/// Frames a spark stays visible.
pub const SPARK_LIFE: u32 = 10;
pub const MAX_SPARK_SPEED: f64 = 2.0;

impl Spark {
	/// A spark at `(x, y)` heading in a random direction.
	pub fn new(x: f64, y: f64, rng: &mut impl Rng) -> Self {
		let angle = rng.random::<f64>() * TAU;
		let speed = rng.random::<f64>() * MAX_SPARK_SPEED;
		Self {
			x,
			y,
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			life: SPARK_LIFE,
			max_life: SPARK_LIFE,
		}
	}

	/// Moves one frame and ages the spark. Returns `false` once it has expired.
	pub fn update(&mut self) -> bool {
		self.x += self.vx;
		self.y += self.vy;
		self.life = self.life.saturating_sub(1);
		self.is_alive()
	}

	pub fn is_alive(&self) -> bool {
		self.life > 0
	}

	/// Linear fade from 1 at birth to 0 at expiry.
	pub fn alpha(&self) -> f64 {
		if self.max_life == 0 {
			return 0.0;
		}
		self.life as f64 / self.max_life as f64
	}

	/// Where the spark was one frame ago. A spark that has not moved yet has
	/// no trail.
	pub fn tail(&self) -> (f64, f64) {
		if self.life >= self.max_life {
			return (self.x, self.y);
		}
		(self.x - self.vx, self.y - self.vy)
	}
}

pub fn burst(sparks: &mut Vec<Spark>, x: f64, y: f64, rng: &mut impl Rng) {
	sparks.extend((0..BURST_SIZE).map(|_| Spark::new(x, y, rng)));
}

/// Advances every spark and drops the expired ones.
pub fn advance_sparks(sparks: &mut Vec<Spark>) {
	sparks.retain_mut(Spark::update);
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn new_spark_starts_at_origin_with_full_life() {
		let mut rng = SmallRng::seed_from_u64(1);
		for _ in 0..100 {
			let spark = Spark::new(10.0, 20.0, &mut rng);
			assert_eq!((spark.x, spark.y), (10.0, 20.0));
			assert_eq!((spark.life, spark.max_life), (SPARK_LIFE, SPARK_LIFE));
			assert!((spark.vx * spark.vx + spark.vy * spark.vy).sqrt() <= MAX_SPARK_SPEED + 1e-9);
			assert_eq!(spark.alpha(), 1.0);
		}
	}

	#[test]
	fn update_moves_and_fades() {
		let mut spark = Spark {
			x: 0.0,
			y: 0.0,
			vx: 1.0,
			vy: -0.5,
			life: 10,
			max_life: 10,
		};
		assert!(spark.update());
		assert_eq!((spark.x, spark.y), (1.0, -0.5));
		assert_eq!(spark.tail(), (0.0, 0.0));
		assert_eq!(spark.life, 9);
		assert!((spark.alpha() - 0.9).abs() < 1e-12);
	}

	#[test]
	fn newborn_spark_has_no_trail() {
		let mut rng = SmallRng::seed_from_u64(5);
		for _ in 0..20 {
			let mut spark = Spark::new(40.0, 30.0, &mut rng);
			assert_eq!(spark.tail(), (40.0, 30.0));
			spark.update();
			let (tail_x, tail_y) = spark.tail();
			assert!((tail_x - 40.0).abs() < 1e-9 && (tail_y - 30.0).abs() < 1e-9);
		}
	}

	#[test]
	fn expires_after_max_life_updates() {
		let mut rng = SmallRng::seed_from_u64(2);
		let mut spark = Spark::new(0.0, 0.0, &mut rng);
		for _ in 0..SPARK_LIFE - 1 {
			assert!(spark.update());
		}
		assert_eq!(spark.life, 1);
		assert!(!spark.update());
		assert_eq!(spark.life, 0);
		assert_eq!(spark.alpha(), 0.0);
	}

	#[test]
	fn burst_adds_five() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut sparks = Vec::new();
		burst(&mut sparks, 5.0, 6.0, &mut rng);
		assert_eq!(sparks.len(), BURST_SIZE);
		assert!(sparks.iter().all(|s| (s.x, s.y) == (5.0, 6.0)));
	}

	#[test]
	fn advance_prunes_expired() {
		let mut rng = SmallRng::seed_from_u64(4);
		let mut sparks = Vec::new();
		burst(&mut sparks, 0.0, 0.0, &mut rng);
		sparks[0].life = 1;
		advance_sparks(&mut sparks);
		assert_eq!(sparks.len(), BURST_SIZE - 1);
		assert!(sparks.iter().all(|s| s.life == SPARK_LIFE - 1));
	}
}
