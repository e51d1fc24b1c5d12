//! Option exercise style definitions.

use num_traits::Float;

/// Option exercise style.
///
/// Defines when an option can be exercised during its lifetime. The
/// analytical engines in this library accept European style only and
/// reject everything else at call time, carrying the style name in the
/// error message.
///
/// # Type Parameters
/// * `T` - Floating-point type for time values (e.g., `f64`)
///
/// # Examples
/// ```
/// use vanilla_models::instruments::ExerciseStyle;
///
/// let european: ExerciseStyle<f64> = ExerciseStyle::European;
/// assert!(european.is_european());
///
/// let bermudan = ExerciseStyle::bermudan(vec![0.25, 0.5, 0.75]);
/// assert!(bermudan.allows_early_exercise());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExerciseStyle<T: Float> {
    /// European style: exercise only at expiry.
    European,

    /// American style: exercise at any time before expiry.
    American,

    /// Bermudan style: exercise on specific dates.
    Bermudan {
        /// Vector of exercise dates (times in years from now)
        exercise_dates: Vec<T>,
    },
}

impl<T: Float> ExerciseStyle<T> {
    /// Creates a new European exercise style.
    #[inline]
    pub fn european() -> Self {
        ExerciseStyle::European
    }

    /// Creates a new American exercise style.
    #[inline]
    pub fn american() -> Self {
        ExerciseStyle::American
    }

    /// Creates a new Bermudan exercise style with specified exercise dates.
    ///
    /// # Arguments
    /// * `exercise_dates` - Times (in years) when the option can be exercised
    #[inline]
    pub fn bermudan(exercise_dates: Vec<T>) -> Self {
        ExerciseStyle::Bermudan { exercise_dates }
    }

    /// Returns whether this is a European exercise style.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns whether this is an American exercise style.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }

    /// Returns whether this is a Bermudan exercise style.
    #[inline]
    pub fn is_bermudan(&self) -> bool {
        matches!(self, ExerciseStyle::Bermudan { .. })
    }

    /// Returns whether this is an early-exercise style (American or Bermudan).
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(
            self,
            ExerciseStyle::American | ExerciseStyle::Bermudan { .. }
        )
    }

    /// Returns the style name, used in engine error messages.
    #[inline]
    pub fn describe(&self) -> &'static str {
        match self {
            ExerciseStyle::European => "European",
            ExerciseStyle::American => "American",
            ExerciseStyle::Bermudan { .. } => "Bermudan",
        }
    }
}
