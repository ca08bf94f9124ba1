// core/src/models.rs
use crate::errors::WorkoutError;
use crate::message::InfoMessage;

pub const LEN_STEP: f64 = 0.65;        // skritt (m)
pub const SWIM_LEN_STROKE: f64 = 1.38; // svømmetak (m)
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

pub const RUN_CALORIE_SPEED_MULT: f64 = 18.0;
pub const RUN_CALORIE_SPEED_DIFF: f64 = 20.0;
pub const WLK_CALORIE_WEIGHT_MULT: f64 = 0.035;
pub const WLK_CALORIE_SPEED_HEIGHT_MULT: f64 = 0.029;
pub const SWM_CALORIE_SPEED_SUM: f64 = 1.1;
pub const SWM_CALORIE_SPEED_WEIGHT_MULT: f64 = 2.0;

/// Største heltall f64 representerer eksakt (2^53).
pub const MAX_EXACT_COUNT: f64 = 9_007_199_254_740_992.0;

/// Felles målinger for alle treningstyper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    action: u64,     // skritt eller tak
    duration_h: f64, // timer
    weight_kg: f64,
}

impl Measurements {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        let action = whole_count("action", action)?;
        if !duration_h.is_finite() || duration_h <= 0.0 {
            return Err(WorkoutError::NonPositiveDuration(duration_h));
        }
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(WorkoutError::InvalidArgument {
                name: "weight",
                value: weight_kg,
                reason: "must be non-negative",
            });
        }
        Ok(Self { action, duration_h, weight_kg })
    }

    pub fn action(&self) -> u64 {
        self.action
    }

    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

fn whole_count(name: &'static str, value: f64) -> Result<u64, WorkoutError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(WorkoutError::InvalidArgument {
            name,
            value,
            reason: "must be a non-negative whole number",
        });
    }
    if value > MAX_EXACT_COUNT {
        return Err(WorkoutError::InvalidArgument { name, value, reason: "too large" });
    }
    Ok(value as u64)
}

fn positive(name: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(WorkoutError::InvalidArgument {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Felles kontrakt: distanse, snittfart og kalorier.
pub trait Training {
    fn measurements(&self) -> &Measurements;

    fn training_type(&self) -> &'static str;

    fn spent_calories(&self) -> f64;

    /// Lengde per skritt/tak i meter.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distanse i km.
    fn distance(&self) -> f64 {
        self.measurements().action() as f64 * self.len_step() / M_IN_KM
    }

    /// Snittfart i km/t.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.measurements().duration_h()
    }

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.measurements().duration_h(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: Measurements,
}

impl Running {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self { base: Measurements::new(action, duration_h, weight_kg)? })
    }
}

impl Training for Running {
    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> f64 {
        (RUN_CALORIE_SPEED_MULT * self.mean_speed() - RUN_CALORIE_SPEED_DIFF)
            * self.base.weight_kg
            / M_IN_KM
            * self.base.duration_h
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    base: Measurements,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            base: Measurements::new(action, duration_h, weight_kg)?,
            height_cm: positive("height", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    // NB: speed²/height skal gulvdeles (floor), ikke vanlig divisjon.
    fn spent_calories(&self) -> f64 {
        let w = self.base.weight_kg;
        let speed_sq_per_height = (self.mean_speed().powi(2) / self.height_cm).floor();
        (WLK_CALORIE_WEIGHT_MULT * w + speed_sq_per_height * WLK_CALORIE_SPEED_HEIGHT_MULT * w)
            * self.base.duration_h
            * MIN_IN_HOUR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: Measurements,
    length_pool_m: f64,
    count_pool: u64,
}

impl Swimming {
    pub fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Result<Self, WorkoutError> {
        let base = Measurements::new(action, duration_h, weight_kg)?;
        if !length_pool_m.is_finite() || length_pool_m < 0.0 {
            return Err(WorkoutError::InvalidArgument {
                name: "length_pool",
                value: length_pool_m,
                reason: "must be non-negative",
            });
        }
        let count_pool = whole_count("count_pool", count_pool)?;
        Ok(Self { base, length_pool_m, count_pool })
    }

    pub fn length_pool_m(&self) -> f64 {
        self.length_pool_m
    }

    pub fn count_pool(&self) -> u64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn measurements(&self) -> &Measurements {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        SWIM_LEN_STROKE
    }

    /// Basert på bassenglengde x antall lengder, ikke tak.
    fn mean_speed(&self) -> f64 {
        self.length_pool_m * self.count_pool as f64 / M_IN_KM / self.base.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWM_CALORIE_SPEED_SUM)
            * SWM_CALORIE_SPEED_WEIGHT_MULT
            * self.base.weight_kg
    }
}

/// Tagged union over treningstypene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn measurements(&self) -> &Measurements {
        self.inner().measurements()
    }

    fn training_type(&self) -> &'static str {
        self.inner().training_type()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }

    fn len_step(&self) -> f64 {
        self.inner().len_step()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }
}
