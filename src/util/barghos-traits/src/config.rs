use thiserror::Error;

/// Tolerances used by [`ApproxEq`](crate::ApproxEq).
///
/// This is passed explicitly to every comparison that needs it. There is no process-wide
/// instance; use [`ValueConfig::DEFAULT`] where a caller has no preference.
///
/// Callers that build a config from outside input should [`validate`](Self::validate) it once up
/// front. Comparisons only `debug_assert!` that the config they are given is valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValueConfig {
	pub f32_epsilon: f32,
	pub f64_epsilon: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ConfigError {
	#[error("f32 tolerance must be a non-negative number, got {0}")]
	InvalidF32Epsilon(f32),
	#[error("f64 tolerance must be a non-negative number, got {0}")]
	InvalidF64Epsilon(f64),
}

impl ValueConfig {
	pub const DEFAULT: Self = Self {
		f32_epsilon: 1e-6,
		f64_epsilon: 1e-12,
	};

	/// Compares floating point values bit-for-bit (modulo `0.0 == -0.0`).
	pub const EXACT: Self = Self {
		f32_epsilon: 0.0,
		f64_epsilon: 0.0,
	};

	#[must_use]
	pub fn with_f32_epsilon(self, f32_epsilon: f32) -> Self {
		Self {
			f32_epsilon,
			..self
		}
	}

	#[must_use]
	pub fn with_f64_epsilon(self, f64_epsilon: f64) -> Self {
		Self {
			f64_epsilon,
			..self
		}
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.f32_epsilon.is_nan() || self.f32_epsilon < 0.0 {
			return Err(ConfigError::InvalidF32Epsilon(self.f32_epsilon));
		}

		if self.f64_epsilon.is_nan() || self.f64_epsilon < 0.0 {
			return Err(ConfigError::InvalidF64Epsilon(self.f64_epsilon));
		}

		Ok(())
	}
}

impl Default for ValueConfig {
	fn default() -> Self {
		Self::DEFAULT
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn presets_are_valid() {
		assert_eq!(ValueConfig::default(), ValueConfig::DEFAULT);
		assert!(ValueConfig::DEFAULT.validate().is_ok());
		assert!(ValueConfig::EXACT.validate().is_ok());
	}

	#[test]
	fn rejects_bad_tolerances() {
		assert_eq!(
			ValueConfig::DEFAULT.with_f32_epsilon(-1.0).validate(),
			Err(ConfigError::InvalidF32Epsilon(-1.0)),
		);
		assert!(matches!(
			ValueConfig::DEFAULT.with_f64_epsilon(f64::NAN).validate(),
			Err(ConfigError::InvalidF64Epsilon(_)),
		));
	}
}
