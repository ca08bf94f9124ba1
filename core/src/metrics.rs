// core/src/metrics.rs
// Prosess-lokale tellere (Prometheus). Påvirker aldri beregnede verdier.
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static WORKOUTS_TOTAL: Lazy<Option<IntCounterVec>> = Lazy::new(|| {
    register(
        Opts::new("workouts_processed_total", "Computed workouts by training type"),
        "training_type",
    )
});

static PACKAGES_REJECTED_TOTAL: Lazy<Option<IntCounterVec>> = Lazy::new(|| {
    register(
        Opts::new("packages_rejected_total", "Packages that failed to build a workout"),
        "reason",
    )
});

fn register(opts: Opts, label: &str) -> Option<IntCounterVec> {
    let counter = match IntCounterVec::new(opts, &[label]) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("metrics: invalid counter opts: {e}");
            return None;
        }
    };
    if let Err(e) = REGISTRY.register(Box::new(counter.clone())) {
        log::warn!("metrics: register failed: {e}");
    }
    Some(counter)
}

fn inc(counter: &Option<IntCounterVec>, label: &str) {
    if let Some(c) = counter {
        c.with_label_values(&[label]).inc();
    }
}

fn get(counter: &Option<IntCounterVec>, label: &str) -> u64 {
    counter.as_ref().map_or(0, |c| c.with_label_values(&[label]).get())
}

pub fn workout_processed(training_type: &str) {
    inc(&WORKOUTS_TOTAL, training_type);
}

pub fn package_rejected(reason: &str) {
    inc(&PACKAGES_REJECTED_TOTAL, reason);
}

pub fn workouts_processed_count(training_type: &str) -> u64 {
    get(&WORKOUTS_TOTAL, training_type)
}

pub fn packages_rejected_count(reason: &str) -> u64 {
    get(&PACKAGES_REJECTED_TOTAL, reason)
}

/// Prometheus tekstformat for alle registrerte tellere.
pub fn gather_text() -> String {
    let mut buf = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&REGISTRY.gather(), &mut buf) {
        log::warn!("metrics: encode failed: {e}");
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
